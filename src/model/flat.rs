//! Flattening index over an aggregated map.
//!
//! Produces a position-ordered view of all items with an id-keyed lookup,
//! giving the navigator and the filter O(1) random access. Building the
//! index validates the global-uniqueness assumption on node ids that some
//! backend producers only honor per sibling collection.

use super::{AggregatedMap, ItemStatus, NodeId};
use crate::error::{ReviewMapError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single item in the flattened view.
///
/// Carries everything the review panel needs to render one row, plus the
/// part/section refs the jump table is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatItem {
    pub id: NodeId,
    pub label: String,
    /// Index in the flattened order. Reassigned from traversal order; the
    /// source's own `position` field is not trusted for addressing.
    pub position: usize,
    pub part: NodeId,
    pub section: NodeId,
    pub score: f64,
    pub max_score: f64,
    pub status: ItemStatus,
    pub informational: bool,
    pub skipped: bool,
}

/// Position-ordered item lookup built from an aggregated map.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct FlatIndex {
    /// Items by id, insertion order = position order
    items: IndexMap<NodeId, FlatItem>,
}

impl FlatIndex {
    /// Build the index from an aggregated map.
    ///
    /// Traversal order: parts, then sections within part, then items
    /// within section, all in declaration order. Positions are assigned
    /// 0..N-1 contiguously along that traversal.
    ///
    /// Any id appearing twice anywhere in the tree is a hard error: a
    /// keyed-collection overwrite here would silently corrupt addressing.
    pub fn build(map: &AggregatedMap) -> Result<Self> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        if let Some(id) = &map.id {
            seen.insert(id);
        }

        let mut items = IndexMap::with_capacity(map.item_count());

        for part in map.parts.values() {
            if !seen.insert(&part.id) {
                return Err(ReviewMapError::duplicate_id(
                    part.id.value(),
                    "flattening map",
                ));
            }
            for section in part.sections.values() {
                if !seen.insert(&section.id) {
                    return Err(ReviewMapError::duplicate_id(
                        section.id.value(),
                        "flattening map",
                    ));
                }
                for item in section.items.values() {
                    if !seen.insert(&item.id) {
                        return Err(ReviewMapError::duplicate_id(
                            item.id.value(),
                            "flattening map",
                        ));
                    }

                    let position = items.len();
                    items.insert(
                        item.id.clone(),
                        FlatItem {
                            id: item.id.clone(),
                            label: item.label.clone(),
                            position,
                            part: part.id.clone(),
                            section: section.id.clone(),
                            score: item.score,
                            max_score: item.max_score,
                            status: item.status,
                            informational: item.informational,
                            skipped: item.skipped,
                        },
                    );
                }
            }
        }

        tracing::debug!(items = items.len(), "flattened test map");

        Ok(Self { items })
    }

    /// Get an item by id
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&FlatItem> {
        self.items.get(id)
    }

    /// Get an item by absolute position
    #[must_use]
    pub fn by_position(&self, position: usize) -> Option<&FlatItem> {
        self.items.get_index(position).map(|(_, item)| item)
    }

    /// Iterate items in position order
    pub fn items(&self) -> impl Iterator<Item = &FlatItem> {
        self.items.values()
    }

    /// Item ids in position order
    #[must_use]
    pub fn order(&self) -> Vec<&NodeId> {
        self.items.keys().collect()
    }

    /// Total item count
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
