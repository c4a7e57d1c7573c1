//! `Display` adapter for readable rendering of a [`PrefixSet`].

use crate::models::PrefixSet;
use crate::pretty_ipset;
use std::fmt;

/// Formats the wrapped set with [`pretty_ipset`].
///
/// # Examples
/// ```
/// use prettyip::PrefixSet;
///
/// let set = PrefixSet::parse_list(&["1.0.0.3", "1.0.0.4/31", "1.0.0.6"]).unwrap();
/// assert_eq!(set.pretty().to_string(), "1.0.0.{3-6}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a>(pub &'a PrefixSet);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match pretty_ipset(self.0) {
            Ok(text) => f.write_str(&text),
            Err(e) => {
                log::error!("Error rendering [{}]: {e}", self.0);
                Err(fmt::Error)
            }
        }
    }
}

impl PrefixSet {
    /// Readable rendering, for use with `{}` formatting.
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }
}
