//! Range merging and single-run formatting.
//!
//! Turns the sorted blocks of a set into contiguous runs, and one run into
//! the most readable text: a single address, a CIDR block, or a dashed range
//! such as `10.0.0.{3-6}`.

use crate::config::{SCORE_CIDR_BLOCK, SCORE_DASHED, SCORE_SINGLE_ADDRESS};
use crate::models::{len_for_size, lo_mask, Candidate, Prefix};
use itertools::Itertools;
use std::error::Error;
use std::net::Ipv4Addr;

/// Merge address-sorted, non-overlapping blocks into maximal contiguous runs.
///
/// A block starting right after the previous run's last address extends it.
pub fn merge_runs(prefixes: &[Prefix]) -> Vec<(Ipv4Addr, Ipv4Addr)> {
    prefixes
        .iter()
        .map(|p| (u32::from(p.lo()) as u64, u32::from(p.hi()) as u64))
        .coalesce(|run, next| {
            if next.0 == run.1 + 1 {
                Ok((run.0, next.1))
            } else {
                Err((run, next))
            }
        })
        .map(|(start, end)| (Ipv4Addr::from(start as u32), Ipv4Addr::from(end as u32)))
        .collect()
}

/// Render the inclusive range `[start, end]` as one scored candidate.
///
/// # Examples
/// ```
/// use prettyip::fmtrange;
/// use std::net::Ipv4Addr;
///
/// let c = fmtrange(Ipv4Addr::new(1, 0, 0, 3), Ipv4Addr::new(1, 0, 0, 6)).unwrap();
/// assert_eq!(c.text, "1.0.0.{3-6}");
/// ```
pub fn fmtrange(start: Ipv4Addr, end: Ipv4Addr) -> Result<Candidate, Box<dyn Error>> {
    if start > end {
        return Err(format!("Invalid range {start}-{end}: start is after end").into());
    }
    if start == end {
        return Ok(Candidate::new(SCORE_SINGLE_ADDRESS, start.to_string()));
    }

    let size = u32::from(end) as u64 - u32::from(start) as u64 + 1;
    if let Some(len) = len_for_size(size) {
        if lo_mask(u32::from(start)) <= len {
            let block = Prefix { addr: start, len };
            return Ok(Candidate::new(SCORE_CIDR_BLOCK, block.to_string()));
        }
    }

    let (start_text, end_text) = (start.to_string(), end.to_string());
    let shared = common_octets(&start_text, &end_text);
    let (start_rest, end_rest) = (&start_text[shared..], &end_text[shared..]);
    let differing = start_rest.split('.').count();
    log::trace!("fmtrange {start}-{end}: {differing} differing octet(s)");

    Ok(Candidate::new(
        SCORE_DASHED[differing - 1],
        format!("{}{{{}-{}}}", &start_text[..shared], start_rest, end_rest),
    ))
}

/// Length of the longest common leading text, cut back to whole octets.
fn common_octets(a: &str, b: &str) -> usize {
    let common = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    a[..common].rfind('.').map_or(0, |dot| dot + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    fn fmt(start: &str, end: &str) -> (f64, String) {
        let c = fmtrange(ip(start), ip(end)).unwrap();
        (c.score, c.text)
    }

    #[test]
    fn test_single_address() {
        assert_eq!(fmt("1.2.3.4", "1.2.3.4"), (0.25, "1.2.3.4".to_string()));
        assert_eq!(fmt("0.0.0.0", "0.0.0.0"), (0.25, "0.0.0.0".to_string()));
    }

    #[test]
    fn test_cidr_block() {
        assert_eq!(fmt("1.0.0.0", "1.0.0.127"), (0.5, "1.0.0.0/25".to_string()));
        assert_eq!(fmt("1.0.0.4", "1.0.0.5"), (0.5, "1.0.0.4/31".to_string()));
        assert_eq!(
            fmt("0.0.0.0", "255.255.255.255"),
            (0.5, "0.0.0.0/0".to_string())
        );
    }

    #[test]
    fn test_power_of_two_but_misaligned() {
        assert_eq!(fmt("1.0.0.3", "1.0.0.6"), (1.0, "1.0.0.{3-6}".to_string()));
        assert_eq!(fmt("1.0.0.5", "1.0.0.6"), (1.0, "1.0.0.{5-6}".to_string()));
    }

    #[test]
    fn test_dashed_cuts_at_octet() {
        assert_eq!(fmt("1.0.0.1", "1.0.0.15"), (1.0, "1.0.0.{1-15}".to_string()));
        assert_eq!(fmt("1.0.0.10", "1.0.0.19"), (1.0, "1.0.0.{10-19}".to_string()));
        assert_eq!(fmt("1.0.0.1", "1.0.0.255"), (1.0, "1.0.0.{1-255}".to_string()));
    }

    #[test]
    fn test_dashed_grows_with_octets() {
        assert_eq!(
            fmt("1.0.0.0", "1.0.1.127"),
            (1.25, "1.0.{0.0-1.127}".to_string())
        );
        assert_eq!(
            fmt("10.1.0.5", "10.3.0.0"),
            (1.5, "10.{1.0.5-3.0.0}".to_string())
        );
        assert_eq!(
            fmt("1.0.0.1", "200.0.0.1"),
            (1.5, "{1.0.0.1-200.0.0.1}".to_string())
        );
    }

    #[test]
    fn test_rejects_reversed_range() {
        assert!(fmtrange(ip("1.0.0.2"), ip("1.0.0.1")).is_err());
    }

    #[test]
    fn test_merge_runs() {
        let prefixes: Vec<Prefix> = ["1.0.0.3", "1.0.0.4/31", "1.0.0.6", "1.0.0.8/29"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(
            merge_runs(&prefixes),
            vec![
                (ip("1.0.0.3"), ip("1.0.0.6")),
                (ip("1.0.0.8"), ip("1.0.0.15"))
            ]
        );
        assert!(merge_runs(&[]).is_empty());

        let top: Vec<Prefix> = vec!["255.255.255.254/31".parse().unwrap()];
        assert_eq!(
            merge_runs(&top),
            vec![(ip("255.255.255.254"), ip("255.255.255.255"))]
        );
    }
}
