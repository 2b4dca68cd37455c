//! Raw test map structures as delivered by the assessment backend.
//!
//! The raw map is the parts -> sections -> items hierarchy before any
//! derived scores are computed. Children are kept in `IndexMap`s keyed by
//! id: insertion order is display order, and the backend payload relies on
//! that ordering being preserved through deserialization.

use super::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw test map - the as-delivered hierarchical test structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTestMap {
    /// Test-level identifier, if the backend reports one
    #[serde(default)]
    pub id: Option<NodeId>,
    /// Test-level label
    #[serde(default)]
    pub label: Option<String>,
    /// Test parts in display order
    pub parts: IndexMap<NodeId, RawTestPart>,
}

/// A test part containing sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestPart {
    pub id: NodeId,
    pub label: String,
    /// Display rank among siblings; informational only, traversal order
    /// is authoritative for addressing
    pub position: usize,
    pub sections: IndexMap<NodeId, RawTestSection>,
}

/// A test section containing items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestSection {
    pub id: NodeId,
    pub label: String,
    pub position: usize,
    pub items: IndexMap<NodeId, RawTestItem>,
}

/// A test item - the leaf unit addressed by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestItem {
    pub id: NodeId,
    pub label: String,
    pub position: usize,
    /// Points awarded to the test-taker
    #[serde(default)]
    pub score: f64,
    /// Maximum awardable points; 0 means the item is not scored
    #[serde(default, alias = "maxScore")]
    pub max_score: f64,
    /// Informational items carry no response and never count toward scoring
    #[serde(default)]
    pub informational: bool,
    /// True if the test-taker gave no response
    #[serde(default)]
    pub skipped: bool,
}

impl RawTestMap {
    /// Create an empty raw map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part, keyed by its own id
    pub fn add_part(&mut self, part: RawTestPart) {
        self.parts.insert(part.id.clone(), part);
    }

    /// Total number of items across all parts and sections
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.parts
            .values()
            .flat_map(|p| p.sections.values())
            .map(|s| s.items.len())
            .sum()
    }
}

impl RawTestPart {
    /// Add a section, keyed by its own id
    pub fn add_section(&mut self, section: RawTestSection) {
        self.sections.insert(section.id.clone(), section);
    }
}

impl RawTestSection {
    /// Add an item, keyed by its own id
    pub fn add_item(&mut self, item: RawTestItem) {
        self.items.insert(item.id.clone(), item);
    }
}
