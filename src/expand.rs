//! Parse rendered text back into addresses.
//!
//! Accepts everything `pretty_ipset` produces: `nothing`, comma-separated
//! items (address, `a.b.c.d/len` or dashed `prefix{lo-hi}`), and one level of
//! `block except items`.

use crate::config::{EMPTY_TEXT, EXCEPT_SEPARATOR};
use crate::models::{Prefix, PrefixSet};
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;

lazy_static! {
    static ref DASHED: Regex =
        Regex::new(r"^(?P<prefix>(?:\d{1,3}\.)*)\{(?P<lo>[\d.]+)-(?P<hi>[\d.]+)\}$")
            .expect("Invalid Regex?");
}

/// Inclusive `(start, end)` of one rendered item.
///
/// # Examples
/// ```
/// use prettyip::expand_range;
/// use std::net::Ipv4Addr;
///
/// let (start, end) = expand_range("1.0.0.{3-6}").unwrap();
/// assert_eq!(start, Ipv4Addr::new(1, 0, 0, 3));
/// assert_eq!(end, Ipv4Addr::new(1, 0, 0, 6));
/// ```
pub fn expand_range(item: &str) -> Result<(Ipv4Addr, Ipv4Addr), Box<dyn Error>> {
    let item = item.trim();
    if let Some(caps) = DASHED.captures(item) {
        let start = dashed_end(&caps["prefix"], &caps["lo"], item)?;
        let end = dashed_end(&caps["prefix"], &caps["hi"], item)?;
        if start > end {
            return Err(format!("Range '{item}' ends before it starts").into());
        }
        return Ok((start, end));
    }
    let block: Prefix = item.parse()?;
    Ok((block.lo(), block.hi()))
}

fn dashed_end(prefix: &str, rest: &str, item: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    let text = format!("{prefix}{rest}");
    text.parse()
        .map_err(|_| format!("Invalid address '{text}' in '{item}'").into())
}

/// The set of addresses described by rendered text.
pub fn expand(text: &str) -> Result<PrefixSet, Box<dyn Error>> {
    let text = text.trim();
    if text == EMPTY_TEXT {
        return Ok(PrefixSet::new());
    }
    match text.split_once(EXCEPT_SEPARATOR) {
        Some((block, excluded)) => {
            let block: Prefix = block.parse()?;
            let excluded = expand_items(excluded)?;
            log::trace!("expand: {block} minus {} block(s)", excluded.len());
            Ok(PrefixSet::from(block).difference(&excluded))
        }
        None => expand_items(text),
    }
}

fn expand_items(text: &str) -> Result<PrefixSet, Box<dyn Error>> {
    if text.contains(EXCEPT_SEPARATOR.trim()) {
        return Err(format!("Nested 'except' is not supported: '{text}'").into());
    }
    let ranges = text
        .split(',')
        .map(expand_range)
        .collect::<Result<Vec<_>, _>>()?;
    PrefixSet::from_ranges(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_expand_range_forms() {
        assert_eq!(expand_range("1.2.3.4").unwrap(), (ip("1.2.3.4"), ip("1.2.3.4")));
        assert_eq!(
            expand_range(" 10.0.0.0/24 ").unwrap(),
            (ip("10.0.0.0"), ip("10.0.0.255"))
        );
        assert_eq!(
            expand_range("1.0.{0.0-1.127}").unwrap(),
            (ip("1.0.0.0"), ip("1.0.1.127"))
        );
        assert_eq!(
            expand_range("{1.0.0.1-200.0.0.1}").unwrap(),
            (ip("1.0.0.1"), ip("200.0.0.1"))
        );
    }

    #[test]
    fn test_expand_range_rejects_garbage() {
        assert!(expand_range("1.0.0.{6-3}").is_err());
        assert!(expand_range("1.0.0.{3-256}").is_err());
        assert!(expand_range("1.0.{3-6}").is_err());
        assert!(expand_range("hello").is_err());
        assert!(expand_range("").is_err());
    }

    #[test]
    fn test_expand() {
        assert!(expand("nothing").unwrap().is_empty());
        assert_eq!(
            expand("1.0.0.{3-6}").unwrap().to_string(),
            "1.0.0.3, 1.0.0.4/31, 1.0.0.6"
        );
        assert_eq!(
            expand("1.0.0.0/25, 1.0.0.{129-255}").unwrap(),
            PrefixSet::parse_list(&["1.0.0.0/24"])
                .unwrap()
                .difference(&PrefixSet::parse_list(&["1.0.0.128"]).unwrap())
        );
    }

    #[test]
    fn test_expand_except() {
        let set = expand("1.0.0.0/20 except 1.0.1.128").unwrap();
        assert_eq!(set.num_addresses(), 4095);
        assert!(!set.contains(ip("1.0.1.128")));
        assert!(set.contains(ip("1.0.15.255")));
        assert!(expand("1.0.0.0/20 except 1.0.1.0/24 except 1.0.1.7").is_err());
    }
}
