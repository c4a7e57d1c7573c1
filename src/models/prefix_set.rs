//! Canonical set of IPv4 prefixes.
//!
//! A [`PrefixSet`] holds the union of its inputs as sorted, merged address
//! intervals and exposes them as the minimal list of aligned CIDR blocks.

use super::prefix::{block_size, lo_mask, Prefix};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;

/// Sorted, disjoint set of IPv4 addresses, viewed as CIDR blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(from = "Vec<Prefix>", into = "Vec<Prefix>")]
pub struct PrefixSet {
    /// Inclusive `(first, last)` intervals, sorted, never overlapping or adjacent.
    ranges: Vec<(u32, u32)>,
    /// Aligned blocks covering `ranges`, in address order.
    prefixes: Vec<Prefix>,
}

impl PrefixSet {
    /// Create an empty set.
    pub fn new() -> PrefixSet {
        PrefixSet::default()
    }

    /// Build a set from inclusive address intervals.
    ///
    /// Fails when an interval has `start > end`.
    pub fn from_ranges<I>(ranges: I) -> Result<PrefixSet, Box<dyn Error>>
    where
        I: IntoIterator<Item = (Ipv4Addr, Ipv4Addr)>,
    {
        let mut raw = Vec::new();
        for (start, end) in ranges {
            if start > end {
                return Err(format!("Invalid range {start}-{end}: start is after end").into());
            }
            raw.push((u32::from(start), u32::from(end)));
        }
        Ok(PrefixSet::from_raw_ranges(raw))
    }

    /// Parse each string as a prefix (or bare address) and take the union.
    pub fn parse_list<S: AsRef<str>>(items: &[S]) -> Result<PrefixSet, Box<dyn Error>> {
        let prefixes = items
            .iter()
            .map(|s| s.as_ref().parse::<Prefix>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(prefixes.into_iter().collect())
    }

    fn from_raw_ranges(mut raw: Vec<(u32, u32)>) -> PrefixSet {
        raw.sort_unstable();
        let mut ranges: Vec<(u32, u32)> = Vec::with_capacity(raw.len());
        for (start, end) in raw {
            match ranges.last_mut() {
                Some(last) if start as u64 <= last.1 as u64 + 1 => {
                    last.1 = last.1.max(end);
                }
                _ => ranges.push((start, end)),
            }
        }
        let prefixes = ranges
            .iter()
            .flat_map(|&(start, end)| decompose(start, end))
            .collect();
        PrefixSet { ranges, prefixes }
    }

    /// The canonical blocks, sorted by address.
    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    /// The merged inclusive intervals, sorted by address.
    pub fn ranges(&self) -> impl Iterator<Item = (Ipv4Addr, Ipv4Addr)> + '_ {
        self.ranges
            .iter()
            .map(|&(start, end)| (Ipv4Addr::from(start), Ipv4Addr::from(end)))
    }

    /// Number of canonical blocks.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Total number of addresses in the set.
    pub fn num_addresses(&self) -> u64 {
        self.ranges
            .iter()
            .map(|&(start, end)| end as u64 - start as u64 + 1)
            .sum()
    }

    /// Lowest address in the set.
    pub fn first(&self) -> Option<Ipv4Addr> {
        self.ranges.first().map(|&(start, _)| Ipv4Addr::from(start))
    }

    /// Highest address in the set.
    pub fn last(&self) -> Option<Ipv4Addr> {
        self.ranges.last().map(|&(_, end)| Ipv4Addr::from(end))
    }

    /// Addresses in either set.
    pub fn union(&self, other: &PrefixSet) -> PrefixSet {
        let raw = self.ranges.iter().chain(other.ranges.iter()).copied();
        PrefixSet::from_raw_ranges(raw.collect())
    }

    /// Addresses in `self` but not in `other`.
    pub fn difference(&self, other: &PrefixSet) -> PrefixSet {
        let mut out = Vec::new();
        for &(start, end) in &self.ranges {
            let mut cur = start as u64;
            let overlapping = other
                .ranges
                .iter()
                .filter(|&&(o_start, o_end)| o_end >= start && o_start <= end);
            for &(o_start, o_end) in overlapping {
                if o_start as u64 > cur {
                    out.push((cur as u32, o_start - 1));
                }
                cur = cur.max(o_end as u64 + 1);
            }
            if cur <= end as u64 {
                out.push((cur as u32, end));
            }
        }
        PrefixSet::from_raw_ranges(out)
    }

    /// Whether every address of `other` is in this set.
    pub fn contains_set(&self, other: &PrefixSet) -> bool {
        other.difference(self).is_empty()
    }

    /// Whether `addr` is in this set.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let bits = u32::from(addr);
        self.ranges
            .iter()
            .any(|&(start, end)| start <= bits && bits <= end)
    }
}

/// Split an inclusive interval into the fewest aligned blocks.
fn decompose(start: u32, end: u32) -> Vec<Prefix> {
    let mut blocks = Vec::new();
    let mut cur = start as u64;
    let end = end as u64;
    while cur <= end {
        let mut len = lo_mask(cur as u32);
        while block_size(len) > end - cur + 1 {
            len += 1;
        }
        blocks.push(Prefix {
            addr: Ipv4Addr::from(cur as u32),
            len,
        });
        cur += block_size(len);
    }
    blocks
}

impl From<Prefix> for PrefixSet {
    fn from(prefix: Prefix) -> Self {
        PrefixSet::from_raw_ranges(vec![(u32::from(prefix.lo()), u32::from(prefix.hi()))])
    }
}

impl From<Vec<Prefix>> for PrefixSet {
    fn from(prefixes: Vec<Prefix>) -> Self {
        prefixes.into_iter().collect()
    }
}

impl From<PrefixSet> for Vec<Prefix> {
    fn from(set: PrefixSet) -> Self {
        set.prefixes
    }
}

impl FromIterator<Prefix> for PrefixSet {
    fn from_iter<I: IntoIterator<Item = Prefix>>(iter: I) -> Self {
        let raw = iter
            .into_iter()
            .map(|p| (u32::from(p.lo()), u32::from(p.hi())))
            .collect();
        PrefixSet::from_raw_ranges(raw)
    }
}

/// Plain comma-separated list of the canonical blocks.
///
/// Use [`PrefixSet::pretty`] for the readable rendering.
impl fmt::Display for PrefixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.prefixes.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(items: &[&str]) -> PrefixSet {
        PrefixSet::parse_list(items).unwrap()
    }

    #[test]
    fn test_canonical_blocks() {
        let set = s(&["1.0.0.3", "1.0.0.4/31", "1.0.0.6"]);
        assert_eq!(set.to_string(), "1.0.0.3, 1.0.0.4/31, 1.0.0.6");
        assert_eq!(set.ranges().count(), 1);
        assert_eq!(set.num_addresses(), 4);
    }

    #[test]
    fn test_siblings_merge() {
        let set = s(&["10.0.0.0/25", "10.0.0.128/25"]);
        assert_eq!(set.prefixes(), &["10.0.0.0/24".parse::<Prefix>().unwrap()]);

        let nested = s(&["10.0.0.0/8", "10.1.2.0/24"]);
        assert_eq!(nested.to_string(), "10.0.0.0/8");
    }

    #[test]
    fn test_full_space() {
        let set = s(&["0.0.0.0/1", "128.0.0.0/1"]);
        assert_eq!(set.to_string(), "0.0.0.0/0");
        assert_eq!(set.num_addresses(), 1u64 << 32);
        assert_eq!(set.last(), Some(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_difference() {
        let set = s(&["1.0.0.0/24"]).difference(&s(&["1.0.0.128"]));
        assert_eq!(
            set.to_string(),
            "1.0.0.0/25, 1.0.0.129, 1.0.0.130/31, 1.0.0.132/30, 1.0.0.136/29, \
             1.0.0.144/28, 1.0.0.160/27, 1.0.0.192/26"
        );
        assert!(!set.contains(Ipv4Addr::new(1, 0, 0, 128)));
        assert!(set.contains(Ipv4Addr::new(1, 0, 0, 127)));

        let nothing = s(&["1.0.0.0/24"]).difference(&s(&["0.0.0.0/0"]));
        assert!(nothing.is_empty());

        let edges = s(&["0.0.0.0/0"]).difference(&s(&["0.0.0.0", "255.255.255.255"]));
        assert_eq!(edges.first(), Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(edges.last(), Some(Ipv4Addr::new(255, 255, 255, 254)));
    }

    #[test]
    fn test_union_and_contains_set() {
        let a = s(&["10.0.0.0/24"]);
        let b = s(&["10.0.1.0/24"]);
        let u = a.union(&b);
        assert_eq!(u.to_string(), "10.0.0.0/23");
        assert!(u.contains_set(&a));
        assert!(!a.contains_set(&u));
        assert!(a.contains_set(&PrefixSet::new()));
    }

    #[test]
    fn test_from_ranges() {
        let set = PrefixSet::from_ranges([(Ipv4Addr::new(1, 0, 0, 3), Ipv4Addr::new(1, 0, 0, 6))])
            .unwrap();
        assert_eq!(set, s(&["1.0.0.3", "1.0.0.4/31", "1.0.0.6"]));
        assert!(
            PrefixSet::from_ranges([(Ipv4Addr::new(1, 0, 0, 6), Ipv4Addr::new(1, 0, 0, 3))])
                .is_err()
        );
    }

    #[test]
    fn test_serde_list() {
        let set: PrefixSet = serde_json::from_str(r#"["10.0.0.0/25", "10.0.0.128/25"]"#).unwrap();
        assert_eq!(set.to_string(), "10.0.0.0/24");
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["10.0.0.0/24"]"#);
    }
}
