//! Rendering logic.
//!
//! This module contains the representation engine:
//! - [`fmtrange`] - one contiguous range as text
//! - [`smallest`] - smallest enclosing block and containment
//! - [`representers`] - candidate generators
//! - [`engine`] - registry and best-candidate selection

mod engine;
mod fmtrange;
mod representers;
mod smallest;

// Re-export public functions
pub use engine::{Registry, DEFAULT_REGISTRY};
pub use fmtrange::{fmtrange, merge_runs};
pub use representers::{dashed_range, empty, except_for, prefix_list, singleton, Representer};
pub use smallest::{find_smallest, ipset_in_ip};
