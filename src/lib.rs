//! **Score aggregation and navigation data model for test-review panels.**
//!
//! `review-map` implements the data model behind a test-review surface: it
//! takes the raw hierarchical test map delivered by an assessment backend
//! (parts -> sections -> items, each item carrying score/maxScore/skipped/
//! informational flags) and derives everything the review UI needs:
//!
//! - an **aggregated map** with score/maxScore rollups and a per-item
//!   review status at every level ([`aggregate`]),
//! - a **flattened index** giving O(1) item access by id or absolute
//!   position ([`FlatIndex`]),
//! - **filtered views** that keep tree shape for branches with matching
//!   leaves and recompute rollups over what remains ([`filter_map`]),
//! - a **jump table** supporting next/previous and direct navigation while
//!   preserving absolute position numbering across filter changes
//!   ([`JumpTable`], [`Navigator`]).
//!
//! Rendering, HTTP transport and the host runner lifecycle are out of
//! scope: the crate computes *which* item is the navigation target and
//! what the scored tree looks like; the host does the rest.
//!
//! ## Getting started
//!
//! ```no_run
//! use review_map::{Direction, RawTestMap, ReviewDataStore, ReviewFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw: RawTestMap = serde_json::from_str(&std::fs::read_to_string("map.json")?)?;
//!
//!     let mut store = ReviewDataStore::with_map(&raw)?;
//!     let map = store.map().expect("map was just set");
//!     println!("overall: {}", map.stats.percentage_label());
//!
//!     // Review only the items that did not reach full score
//!     store.set_active_filter(ReviewFilter::Incorrect);
//!     let target = store.navigate(Direction::Next)?;
//!     println!("next item to review: {} at {}", target.item, target.position);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Model lifecycle
//!
//! All derived structures are rebuilt synchronously and atomically when a
//! new raw map is supplied; filters rebuild the filtered view and the jump
//! table without disturbing absolute numbering (excluded positions become
//! holes). Consumers receive read-only [`std::sync::Arc`] snapshots and
//! mutate state only through [`ReviewDataStore`] calls; change
//! notifications are delivered synchronously before the triggering call
//! returns.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Percentage math truncates by design (floor semantics)
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // `score`/`max_score` and `section`/`sections` read clearly in context
    clippy::similar_names
)]

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod nav;
pub mod store;

// Re-export main types for convenience
pub use config::{ConfigError, ReviewPanelConfig, Validatable};
pub use error::{ReviewMapError, Result, StructureErrorKind};
pub use filter::{filter_map, ReviewFilter};
pub use model::{
    aggregate, AggregatedItem, AggregatedMap, AggregatedPart, AggregatedSection, FlatIndex,
    FlatItem, ItemStatus, NodeId, RawTestItem, RawTestMap, RawTestPart, RawTestSection,
    ScoreSummary,
};
pub use nav::{Direction, JumpEntry, JumpTable, NavigationContext, Navigator};
pub use store::{ReviewDataStore, ReviewEvent};
