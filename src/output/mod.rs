//! Output formatting for prefix sets.
//!
//! This module handles presenting renderings:
//! - [`pretty`] - `Display` adapter delegating to `pretty_ipset`
//! - [`terminal`] - candidate listing with colors

mod pretty;
mod terminal;

pub use pretty::Pretty;
pub use terminal::{candidate_line, candidate_lines, format_score, print_candidates};
