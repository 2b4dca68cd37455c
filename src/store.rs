//! Review data store: the single owner of the navigation/review model.
//!
//! The surrounding UI plugins feed raw maps and filter selections into the
//! store and read aggregated/filtered views back out. Every write is
//! atomic: aggregation, flattening and jump-table rebuilds complete before
//! the call returns, and a failed write leaves prior state untouched.
//! Change notifications are delivered synchronously to registered
//! observers, in registration order, before the triggering call returns.

use crate::error::Result;
use crate::filter::{filter_map, ReviewFilter};
use crate::model::{aggregate, AggregatedMap, FlatIndex, NodeId, RawTestMap};
use crate::nav::{Direction, JumpTable, NavigationContext, Navigator};
use std::sync::Arc;

/// Change notification delivered to observers.
///
/// Maps are carried as `Arc` snapshots: observers get a read-only view and
/// must route any mutation back through the store.
#[derive(Debug, Clone)]
pub enum ReviewEvent {
    /// The raw map was replaced and all derived structures rebuilt
    MapChanged { map: Arc<AggregatedMap> },
    /// A filter was applied or cleared; `map` is the new filtered view
    FilterChanged {
        filter: ReviewFilter,
        map: Arc<AggregatedMap>,
    },
}

type Observer = Box<dyn Fn(&ReviewEvent)>;

/// Owner of the aggregated map, flattened index, filtered view and the
/// active jump table.
///
/// Designed for exactly one logical owner issuing sequential calls on the
/// UI thread; it is not meant to be shared across threads.
#[derive(Default)]
pub struct ReviewDataStore {
    aggregated: Option<Arc<AggregatedMap>>,
    flat: FlatIndex,
    filtered: Option<Arc<AggregatedMap>>,
    active_filter: ReviewFilter,
    navigator: Navigator,
    observers: Vec<Observer>,
}

impl ReviewDataStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with a raw map
    pub fn with_map(raw: &RawTestMap) -> Result<Self> {
        let mut store = Self::new();
        store.set_map(raw)?;
        Ok(store)
    }

    /// Register a change observer.
    ///
    /// Observers are invoked synchronously, in registration order, before
    /// the triggering call returns.
    pub fn on_change<F>(&mut self, observer: F)
    where
        F: Fn(&ReviewEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Replace the raw map, rebuilding every derived structure.
    ///
    /// Aggregation, flattening and the jump table are rebuilt into
    /// temporaries and committed together; dependent reads never observe
    /// an intermediate state. The active filter survives the replacement
    /// and is reapplied to the new map; only a `MapChanged` notification
    /// fires - filter notifications are reserved for filter calls.
    pub fn set_map(&mut self, raw: &RawTestMap) -> Result<()> {
        let aggregated = Arc::new(aggregate(raw)?);
        let flat = FlatIndex::build(&aggregated)?;

        let filter = self.active_filter;
        let (filtered, table) = Self::derive_view(&aggregated, &flat, filter);

        self.navigator = Navigator::new(table);
        self.filtered = filtered;
        self.flat = flat;
        self.aggregated = Some(Arc::clone(&aggregated));

        tracing::info!(
            items = aggregated.item_count(),
            percentage = aggregated.stats.percentage(),
            filter = %filter,
            "test map replaced"
        );
        self.emit(&ReviewEvent::MapChanged { map: aggregated });
        Ok(())
    }

    /// The aggregated (unfiltered) map, if a raw map was supplied
    #[must_use]
    pub fn map(&self) -> Option<Arc<AggregatedMap>> {
        self.aggregated.clone()
    }

    /// The active view: the filtered map when a filter is active, the
    /// aggregated map otherwise
    #[must_use]
    pub fn filtered_map(&self) -> Option<Arc<AggregatedMap>> {
        self.filtered.clone().or_else(|| self.aggregated.clone())
    }

    /// The flattened index over the unfiltered map
    #[must_use]
    pub fn flat_index(&self) -> &FlatIndex {
        &self.flat
    }

    /// The currently active filter
    #[must_use]
    pub fn active_filter(&self) -> ReviewFilter {
        self.active_filter
    }

    /// The current navigation position
    #[must_use]
    pub fn position(&self) -> usize {
        self.navigator.position()
    }

    /// Apply a filter, rebuilding the filtered view and the jump table.
    ///
    /// No dedupe is performed: re-applying the current filter recomputes
    /// and renotifies, including the identity reset. The current position
    /// is preserved, clamped to the nearest still-navigable entry. With no
    /// map loaded the filter is only recorded for the next `set_map`.
    pub fn set_active_filter(&mut self, filter: ReviewFilter) {
        self.active_filter = filter;

        let Some(aggregated) = self.aggregated.clone() else {
            return;
        };

        let (filtered, table) = Self::derive_view(&aggregated, &self.flat, filter);
        self.navigator = Navigator::with_position(table, self.navigator.position());

        let view = filtered.clone().unwrap_or_else(|| Arc::clone(&aggregated));
        self.filtered = filtered;

        tracing::debug!(filter = %filter, retained = view.item_count(), "filter applied");
        self.emit(&ReviewEvent::FilterChanged { filter, map: view });
    }

    /// Apply a filter by its UI-facing identifier.
    ///
    /// Unknown identifiers fail before any mutation and fire no
    /// notification.
    pub fn set_active_filter_id(&mut self, name: &str) -> Result<()> {
        let filter = ReviewFilter::from_id(name)?;
        self.set_active_filter(filter);
        Ok(())
    }

    /// Clear the active filter (identity filter).
    ///
    /// This is itself a filter application: it recomputes and renotifies
    /// even when the state already equals the unfiltered view.
    pub fn reset_filter(&mut self) {
        self.set_active_filter(ReviewFilter::All);
    }

    /// Move next/previous across the active view, skipping holes
    pub fn navigate(&mut self, direction: Direction) -> Result<NavigationContext> {
        self.navigator.navigate(direction)
    }

    /// Jump directly to an item of the active view
    pub fn set_active_item(&mut self, id: &NodeId) -> Result<NavigationContext> {
        self.navigator.jump_to_item(id)
    }

    /// Jump directly to an absolute position, clamping to the nearest
    /// navigable entry
    pub fn jump_to_position(&mut self, position: usize) -> Result<NavigationContext> {
        self.navigator.jump_to_position(position)
    }

    /// Context of the current position
    pub fn current_context(&self) -> Result<NavigationContext> {
        self.navigator.current_context()
    }

    /// Whether a previous move would change position
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.navigator.has_previous()
    }

    /// Whether a next move would change position
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.navigator.has_next()
    }

    /// Build the filtered view and matching jump table for a filter.
    ///
    /// The identity filter produces no separate filtered map and a
    /// hole-free table.
    fn derive_view(
        aggregated: &Arc<AggregatedMap>,
        flat: &FlatIndex,
        filter: ReviewFilter,
    ) -> (Option<Arc<AggregatedMap>>, JumpTable) {
        if filter == ReviewFilter::All {
            (None, JumpTable::build(flat))
        } else {
            let filtered = filter_map(aggregated, flat, |item| filter.matches(item));
            let table = JumpTable::build_filtered(flat, |item| filter.matches(item));
            (Some(Arc::new(filtered)), table)
        }
    }

    fn emit(&self, event: &ReviewEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}

impl std::fmt::Debug for ReviewDataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewDataStore")
            .field("aggregated", &self.aggregated)
            .field("active_filter", &self.active_filter)
            .field("position", &self.navigator.position())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
