//! Domain models for prettyip.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Prefix`] - aligned IPv4 CIDR block and address arithmetic
//! - [`PrefixSet`] - canonical sorted set of blocks with set operations
//! - [`Candidate`] - scored text proposed by a representer

mod candidate;
mod prefix;
mod prefix_set;

// Re-export public types
pub use candidate::Candidate;
pub use prefix::{
    block_size, cut_addr, get_cidr_mask, len_for_size, lo_mask, Prefix, MAX_LENGTH, SPACE_SIZE,
};
pub use prefix_set::PrefixSet;
