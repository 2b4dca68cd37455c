//! Data model for test-review maps.
//!
//! The raw parts -> sections -> items hierarchy delivered by the backend is
//! aggregated into a scored tree ([`aggregate`]) and flattened into a
//! position-ordered index ([`FlatIndex`]) for O(1) item access. Filtered
//! views and jump tables are derived from these two structures.

mod aggregated;
mod flat;
mod identifiers;
mod raw;

pub use aggregated::*;
pub use flat::*;
pub use identifiers::*;
pub use raw::*;
