//! Render sets of IPv4 blocks as the most readable single string.
//!
//! ```
//! use prettyip::{pretty_ipset, PrefixSet};
//!
//! let set = PrefixSet::parse_list(&["1.0.0.0/20"])
//!     .unwrap()
//!     .difference(&PrefixSet::parse_list(&["1.0.1.128"]).unwrap());
//! assert_eq!(pretty_ipset(&set).unwrap(), "1.0.0.0/20 except 1.0.1.128");
//! ```

pub mod config;
pub mod expand;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;

pub use expand::{expand, expand_range};
pub use models::{Candidate, Prefix, PrefixSet};
pub use output::Pretty;
pub use processing::{find_smallest, fmtrange, ipset_in_ip, Registry, Representer};

/// The most readable rendering of `set`, using every representer.
pub fn pretty_ipset(set: &PrefixSet) -> Result<String, Box<dyn Error>> {
    processing::DEFAULT_REGISTRY.pretty(set)
}

/// Every candidate rendering of `set`, in registration order.
pub fn representations_for(set: &PrefixSet) -> Result<Vec<Candidate>, Box<dyn Error>> {
    processing::DEFAULT_REGISTRY
        .representations_for(set, &[])
        .collect()
}
