//! Jump table: the positional index behind review navigation.
//!
//! One entry per absolute item position of the unfiltered map. When a
//! filter is active, excluded positions stay in the table as holes so that
//! absolute position addressing survives filter changes.

use crate::model::{FlatIndex, FlatItem, NodeId};
use serde::{Deserialize, Serialize};

/// A single navigable position.
///
/// A hole (all id fields `None`) marks a position excluded by the active
/// filter; it exists for numbering continuity only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpEntry {
    pub item: Option<NodeId>,
    pub part: Option<NodeId>,
    pub section: Option<NodeId>,
    pub position: usize,
}

impl JumpEntry {
    fn from_item(item: &FlatItem) -> Self {
        Self {
            item: Some(item.id.clone()),
            part: Some(item.part.clone()),
            section: Some(item.section.clone()),
            position: item.position,
        }
    }

    const fn hole(position: usize) -> Self {
        Self {
            item: None,
            part: None,
            section: None,
            position,
        }
    }

    /// Whether this position has no navigable item
    #[must_use]
    pub const fn is_hole(&self) -> bool {
        self.item.is_none()
    }
}

/// Ordered sequence of navigable positions over a flattened map.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct JumpTable {
    entries: Vec<JumpEntry>,
}

impl JumpTable {
    /// Build the default (unfiltered) jump table: every position navigable.
    pub fn build(index: &FlatIndex) -> Self {
        Self {
            entries: index.items().map(JumpEntry::from_item).collect(),
        }
    }

    /// Build a filtered jump table over the *unfiltered* index.
    ///
    /// Positions whose item fails the predicate become holes; the entry
    /// count always equals the unfiltered item count.
    pub fn build_filtered<F>(index: &FlatIndex, retained: F) -> Self
    where
        F: Fn(&FlatItem) -> bool,
    {
        let entries: Vec<JumpEntry> = index
            .items()
            .map(|item| {
                if retained(item) {
                    JumpEntry::from_item(item)
                } else {
                    JumpEntry::hole(item.position)
                }
            })
            .collect();

        tracing::debug!(
            positions = entries.len(),
            holes = entries.iter().filter(|e| e.is_hole()).count(),
            "built filtered jump table"
        );

        Self { entries }
    }

    /// Number of positions (holes included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no positions at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at a position
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&JumpEntry> {
        self.entries.get(position)
    }

    /// All entries in position order
    #[must_use]
    pub fn entries(&self) -> &[JumpEntry] {
        &self.entries
    }

    /// Position of an item by id, if it is navigable in this table
    #[must_use]
    pub fn position_of(&self, id: &NodeId) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.item.as_ref() == Some(id))
            .map(|e| e.position)
    }

    /// Next navigable entry strictly after `position`, skipping holes
    #[must_use]
    pub fn next_from(&self, position: usize) -> Option<&JumpEntry> {
        self.entries
            .iter()
            .skip(position.saturating_add(1))
            .find(|e| !e.is_hole())
    }

    /// Previous navigable entry strictly before `position`, skipping holes
    #[must_use]
    pub fn previous_from(&self, position: usize) -> Option<&JumpEntry> {
        self.entries
            .iter()
            .take(position.min(self.entries.len()))
            .rev()
            .find(|e| !e.is_hole())
    }

    /// First navigable entry
    #[must_use]
    pub fn first_navigable(&self) -> Option<&JumpEntry> {
        self.entries.iter().find(|e| !e.is_hole())
    }

    /// Last navigable entry
    #[must_use]
    pub fn last_navigable(&self) -> Option<&JumpEntry> {
        self.entries.iter().rev().find(|e| !e.is_hole())
    }

    /// Nearest navigable entry to a requested position.
    ///
    /// Out-of-range positions are clamped into the table first. If the
    /// clamped position is a hole, the closest non-hole entry wins, lower
    /// positions preferred on ties. `None` only when the table has no
    /// navigable entry at all.
    #[must_use]
    pub fn nearest_navigable(&self, position: usize) -> Option<&JumpEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let clamped = position.min(self.entries.len() - 1);

        for distance in 0..self.entries.len() {
            if distance <= clamped {
                if let Some(entry) = self.entries.get(clamped - distance) {
                    if !entry.is_hole() {
                        return Some(entry);
                    }
                }
            }
            if let Some(entry) = self.entries.get(clamped + distance) {
                if !entry.is_hole() {
                    return Some(entry);
                }
            }
        }
        None
    }
}
