//! Smallest enclosing block and containment.

use crate::config::EMPTY_SET_SMALLEST_LEN;
use crate::models::{Prefix, PrefixSet};
use std::net::Ipv4Addr;

/// The smallest CIDR block containing every address of `set`.
///
/// The empty set has no meaningful enclosing block and returns `0.0.0.0/24`.
pub fn find_smallest(set: &PrefixSet) -> Prefix {
    let (Some(first), Some(last)) = (set.first(), set.last()) else {
        return Prefix {
            addr: Ipv4Addr::UNSPECIFIED,
            len: EMPTY_SET_SMALLEST_LEN,
        };
    };

    // shared leading bits of the two extremes
    let len = (u32::from(first) ^ u32::from(last)).leading_zeros();
    let mask = u32::MAX.checked_shl(32 - len).unwrap_or(0);
    Prefix {
        addr: Ipv4Addr::from(u32::from(first) & mask),
        len: len as u8,
    }
}

/// Whether every block of `set` lies within `block`.
pub fn ipset_in_ip(set: &PrefixSet, block: &Prefix) -> bool {
    set.prefixes().iter().all(|p| block.contains_prefix(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(items: &[&str]) -> PrefixSet {
        PrefixSet::parse_list(items).unwrap()
    }

    fn p(text: &str) -> Prefix {
        text.parse().unwrap()
    }

    #[test]
    fn test_find_smallest_empty() {
        assert_eq!(find_smallest(&PrefixSet::new()), p("0.0.0.0/24"));
    }

    #[test]
    fn test_find_smallest_full_space() {
        assert_eq!(find_smallest(&s(&["0.0.0.0/0"])), p("0.0.0.0/0"));
        assert_eq!(find_smallest(&s(&["0.0.0.0", "255.255.255.255"])).len, 0);
    }

    #[test]
    fn test_find_smallest() {
        assert_eq!(find_smallest(&s(&["1.2.3.4"])), p("1.2.3.4/32"));
        assert_eq!(find_smallest(&s(&["10.0.0.0/24"])), p("10.0.0.0/24"));
        assert_eq!(
            find_smallest(&s(&["1.0.0.3", "1.0.0.4/31", "1.0.0.6"])),
            p("1.0.0.0/29")
        );
        assert_eq!(
            find_smallest(&s(&["10.0.0.0/24", "10.0.3.7"])),
            p("10.0.0.0/22")
        );
        assert_eq!(find_smallest(&s(&["1.0.0.1", "200.0.0.1"])), p("0.0.0.0/0"));
        assert_eq!(find_smallest(&s(&["127.255.255.255", "128.0.0.0"])).len, 0);
    }

    #[test]
    fn test_ipset_in_ip() {
        let set = s(&["10.0.0.0/24", "10.0.3.7"]);
        assert!(ipset_in_ip(&set, &find_smallest(&set)));
        assert!(ipset_in_ip(&set, &p("10.0.0.0/8")));
        assert!(!ipset_in_ip(&set, &p("10.0.0.0/23")));
        assert!(ipset_in_ip(&PrefixSet::new(), &p("1.2.3.4")));
    }
}
