//! Query system for Strand
//!
//! Provides bounded-depth path enumeration between two nodes.

mod path;
mod types;

pub use path::{PathQuery, DEFAULT_MAX_DEPTH};
pub use types::{Path, PathSearch, TraversalFault};
