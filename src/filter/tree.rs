//! Tree filtering over aggregated maps.
//!
//! A filtered map keeps only the branches leading to at least one matching
//! leaf and recomputes every rollup over the retained leaves. Dropped
//! branches are omitted entirely, so part/section counts on the result
//! reflect the filtered view. The root is always retained, possibly with
//! zero children, so callers always get a valid tree shape.

use crate::model::{
    AggregatedMap, AggregatedPart, AggregatedSection, FlatIndex, FlatItem, ScoreSummary,
};
use indexmap::IndexMap;

/// Filter an aggregated map through a leaf predicate.
///
/// Post-order: a leaf is retained iff the predicate matches, a parent is
/// retained iff it keeps at least one child. The identity predicate
/// reproduces an equivalent copy of the input.
///
/// Items missing from the flattening index are treated as non-matching;
/// the index is always built from the same aggregated map in practice.
pub fn filter_map<F>(map: &AggregatedMap, index: &FlatIndex, predicate: F) -> AggregatedMap
where
    F: Fn(&FlatItem) -> bool,
{
    let mut parts = IndexMap::new();
    let mut stats = ScoreSummary::default();

    for (part_id, part) in &map.parts {
        if let Some(filtered_part) = filter_part(part, index, &predicate) {
            stats.absorb(filtered_part.stats);
            parts.insert(part_id.clone(), filtered_part);
        }
    }

    let mut filtered = AggregatedMap {
        id: map.id.clone(),
        label: map.label.clone(),
        parts,
        stats,
        content_hash: 0,
    };
    filtered.calculate_content_hash();

    tracing::debug!(
        retained = filtered.item_count(),
        total = map.item_count(),
        "filtered test map"
    );

    filtered
}

fn filter_part<F>(part: &AggregatedPart, index: &FlatIndex, predicate: &F) -> Option<AggregatedPart>
where
    F: Fn(&FlatItem) -> bool,
{
    let mut sections = IndexMap::new();
    let mut stats = ScoreSummary::default();

    for (section_id, section) in &part.sections {
        if let Some(filtered_section) = filter_section(section, index, predicate) {
            stats.absorb(filtered_section.stats);
            sections.insert(section_id.clone(), filtered_section);
        }
    }

    if sections.is_empty() {
        return None;
    }

    Some(AggregatedPart {
        id: part.id.clone(),
        label: part.label.clone(),
        position: part.position,
        sections,
        stats,
    })
}

fn filter_section<F>(
    section: &AggregatedSection,
    index: &FlatIndex,
    predicate: &F,
) -> Option<AggregatedSection>
where
    F: Fn(&FlatItem) -> bool,
{
    let mut items = IndexMap::new();
    let mut stats = ScoreSummary::default();

    for (item_id, item) in &section.items {
        let matched = index.get(item_id).is_some_and(|flat| predicate(flat));
        if matched {
            stats.absorb(item.counted_scores());
            items.insert(item_id.clone(), item.clone());
        }
    }

    if items.is_empty() {
        return None;
    }

    Some(AggregatedSection {
        id: section.id.clone(),
        label: section.label.clone(),
        position: section.position,
        items,
        stats,
    })
}
