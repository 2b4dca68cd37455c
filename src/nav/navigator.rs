//! Navigator: current-position state over a jump table.
//!
//! The navigation control surface (next/previous buttons, direct-jump
//! links) drives a [`Navigator`] and reacts to the returned
//! [`NavigationContext`] to ask the host runner for the target item.

use super::{JumpEntry, JumpTable};
use crate::error::{ReviewMapError, Result};
use crate::model::NodeId;
use serde::{Deserialize, Serialize};

/// Direction of relative navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// Resolved navigation target handed back to the control surface.
///
/// Unlike a [`JumpEntry`], a context always points at a real item - holes
/// are never resolved as targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub item: NodeId,
    pub part: NodeId,
    pub section: NodeId,
    pub position: usize,
}

impl NavigationContext {
    fn from_entry(entry: &JumpEntry) -> Option<Self> {
        Some(Self {
            item: entry.item.clone()?,
            part: entry.part.clone()?,
            section: entry.section.clone()?,
            position: entry.position,
        })
    }
}

/// Position state over a jump table.
///
/// Owns the active jump table and the current position. Rebuilt by the
/// data store whenever the map or the active filter changes; the current
/// position is then re-clamped to the nearest navigable entry.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Navigator {
    table: JumpTable,
    current: usize,
}

impl Navigator {
    /// Create a navigator starting at the first navigable position.
    ///
    /// An empty or all-hole table yields a navigator parked at position 0;
    /// navigation calls on it fail with a `Navigation` error.
    pub fn new(table: JumpTable) -> Self {
        let current = table.first_navigable().map_or(0, |e| e.position);
        Self { table, current }
    }

    /// Create a navigator keeping a previous position, clamped to the
    /// nearest navigable entry of the new table.
    pub fn with_position(table: JumpTable, position: usize) -> Self {
        let current = match table.nearest_navigable(position) {
            Some(entry) => {
                if entry.position != position {
                    tracing::warn!(
                        requested = position,
                        resolved = entry.position,
                        "requested position not navigable, clamped"
                    );
                }
                entry.position
            }
            None => 0,
        };
        Self { table, current }
    }

    /// The active jump table
    #[must_use]
    pub fn table(&self) -> &JumpTable {
        &self.table
    }

    /// Current absolute position
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Context of the current position.
    ///
    /// Fails when the table has no navigable entry (empty map or a filter
    /// matching nothing).
    pub fn current_context(&self) -> Result<NavigationContext> {
        self.table
            .get(self.current)
            .and_then(NavigationContext::from_entry)
            .ok_or_else(|| ReviewMapError::navigation("no navigable position available"))
    }

    /// Move next/previous, skipping holes.
    ///
    /// At the boundary the move is a no-op returning the current context
    /// unchanged; callers are expected to disable the control instead of
    /// relying on wraparound.
    pub fn navigate(&mut self, direction: Direction) -> Result<NavigationContext> {
        let target = match direction {
            Direction::Next => self.table.next_from(self.current),
            Direction::Previous => self.table.previous_from(self.current),
        };

        match target.and_then(NavigationContext::from_entry) {
            Some(context) => {
                self.current = context.position;
                Ok(context)
            }
            None => self.current_context(),
        }
    }

    /// Jump directly to an absolute position.
    ///
    /// Out-of-range and filtered-out positions clamp to the nearest
    /// navigable entry (lower position wins on ties) rather than failing.
    pub fn jump_to_position(&mut self, position: usize) -> Result<NavigationContext> {
        let entry = self
            .table
            .nearest_navigable(position)
            .ok_or_else(|| ReviewMapError::navigation("no navigable position available"))?;

        let context = NavigationContext::from_entry(entry)
            .ok_or_else(|| ReviewMapError::navigation("resolved entry is not navigable"))?;
        self.current = context.position;
        Ok(context)
    }

    /// Jump directly to an item by id.
    ///
    /// Fails when the item is not navigable in the active table (unknown
    /// id, or excluded by the active filter).
    pub fn jump_to_item(&mut self, id: &NodeId) -> Result<NavigationContext> {
        let position = self.table.position_of(id).ok_or_else(|| {
            ReviewMapError::navigation(format!("item '{id}' is not navigable in the active view"))
        })?;
        self.jump_to_position(position)
    }

    /// Whether a previous move would change position
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.table.previous_from(self.current).is_some()
    }

    /// Whether a next move would change position
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.table.next_from(self.current).is_some()
    }
}
