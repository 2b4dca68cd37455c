//! Filtering of aggregated maps.
//!
//! [`ReviewFilter`] names the predicates the review toolbar offers;
//! [`filter_map`] prunes an aggregated tree down to matching branches
//! while keeping rollups consistent.

mod predicate;
mod tree;

pub use predicate::*;
pub use tree::*;
