//! Aggregated test map - raw map annotated with rolled-up scores.
//!
//! [`aggregate`] walks the raw hierarchy post-order, classifies every item
//! and sums `score`/`max_score` bottom-up so that every non-leaf node
//! carries the totals of its descendant items. The aggregated map is the
//! input of both the flattening index and the tree filter.

use super::{NodeId, RawTestItem, RawTestMap, RawTestPart, RawTestSection};
use crate::error::{ReviewMapError, Result, StructureErrorKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Review status of an item, derived from its score and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ItemStatus {
    /// Full score achieved on a scored item
    Correct,
    /// Scored item with a partial or zero score
    Incorrect,
    /// No response given
    Skipped,
    /// Informational item, never scored
    Informational,
    /// No score tracked for this item
    Default,
}

impl ItemStatus {
    /// Classify an item.
    ///
    /// Precedence: informational beats everything, then unscored items,
    /// then skipped, then the correct/incorrect split.
    #[must_use]
    pub fn classify(item: &RawTestItem) -> Self {
        if item.informational {
            Self::Informational
        } else if item.max_score <= 0.0 {
            Self::Default
        } else if item.skipped {
            Self::Skipped
        } else if item.score == item.max_score {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Get display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
            Self::Skipped => "Skipped",
            Self::Informational => "Informational",
            Self::Default => "Not scored",
        }
    }

    /// CSS class hook for the answer-status indicator
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Skipped => "skipped",
            Self::Informational => "informational",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rolled-up score pair carried by every node of the aggregated tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Sum of awarded points over counted descendant items
    pub score: f64,
    /// Sum of awardable points over counted descendant items
    pub max_score: f64,
}

impl ScoreSummary {
    /// Create a summary from a single score pair
    #[must_use]
    pub const fn new(score: f64, max_score: f64) -> Self {
        Self { score, max_score }
    }

    /// Whether any score is tracked in this subtree
    #[must_use]
    pub fn with_score(&self) -> bool {
        self.max_score > 0.0
    }

    /// Add another summary into this one
    pub fn absorb(&mut self, other: Self) {
        self.score += other.score;
        self.max_score += other.max_score;
    }

    /// Score as a floored percentage of the maximum.
    ///
    /// Falls back to 0 when no score is tracked, so callers never see
    /// NaN or infinity from a 0/0 subtree.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        if self.max_score > 0.0 {
            (100.0 * self.score / self.max_score).floor() as u8
        } else {
            0
        }
    }

    /// Percentage formatted for display, e.g. `"50%"`
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage())
    }
}

/// Aggregated item - raw item plus derived status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedItem {
    pub id: NodeId,
    pub label: String,
    pub position: usize,
    pub score: f64,
    pub max_score: f64,
    pub informational: bool,
    pub skipped: bool,
    pub status: ItemStatus,
}

impl AggregatedItem {
    fn from_raw(item: &RawTestItem) -> Self {
        Self {
            id: item.id.clone(),
            label: item.label.clone(),
            position: item.position,
            score: item.score,
            max_score: item.max_score,
            informational: item.informational,
            skipped: item.skipped,
            status: ItemStatus::classify(item),
        }
    }

    /// Score contribution of this item to parent rollups.
    ///
    /// Informational items are excluded from scoring entirely.
    #[must_use]
    pub fn counted_scores(&self) -> ScoreSummary {
        if self.informational {
            ScoreSummary::default()
        } else {
            ScoreSummary::new(self.score, self.max_score)
        }
    }
}

/// Aggregated section with item children and rolled-up scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedSection {
    pub id: NodeId,
    pub label: String,
    pub position: usize,
    pub items: IndexMap<NodeId, AggregatedItem>,
    pub stats: ScoreSummary,
}

/// Aggregated part with section children and rolled-up scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedPart {
    pub id: NodeId,
    pub label: String,
    pub position: usize,
    pub sections: IndexMap<NodeId, AggregatedSection>,
    pub stats: ScoreSummary,
}

/// Aggregated test map - the root of the scored tree.
///
/// Filtered maps share this type: a filtered map is an aggregated map
/// restricted to branches with at least one matching leaf.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregatedMap {
    pub id: Option<NodeId>,
    pub label: Option<String>,
    pub parts: IndexMap<NodeId, AggregatedPart>,
    pub stats: ScoreSummary,
    /// Content hash for quick equality checks between rebuilds
    #[serde(skip)]
    pub content_hash: u64,
}

impl AggregatedMap {
    /// Number of parts
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Number of sections across all parts
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.parts.values().map(|p| p.sections.len()).sum()
    }

    /// Number of items across all parts and sections
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.parts
            .values()
            .flat_map(|p| p.sections.values())
            .map(|s| s.items.len())
            .sum()
    }

    /// Iterate items in declaration order together with their part and
    /// section ids.
    pub fn items_in_order(&self) -> impl Iterator<Item = (&NodeId, &NodeId, &AggregatedItem)> {
        self.parts.values().flat_map(|part| {
            part.sections.values().flat_map(move |section| {
                section
                    .items
                    .values()
                    .map(move |item| (&part.id, &section.id, item))
            })
        })
    }

    /// Calculate and update the content hash.
    ///
    /// Hashes node ids in traversal order plus the leaf score pairs, so two
    /// maps with identical structure and scores hash alike.
    pub fn calculate_content_hash(&mut self) {
        let mut hasher_input = Vec::new();

        if let Some(id) = &self.id {
            hasher_input.extend(id.value().as_bytes());
        }
        for part in self.parts.values() {
            hasher_input.extend(part.id.value().as_bytes());
            for section in part.sections.values() {
                hasher_input.extend(section.id.value().as_bytes());
                for item in section.items.values() {
                    hasher_input.extend(item.id.value().as_bytes());
                    hasher_input.extend(item.score.to_le_bytes());
                    hasher_input.extend(item.max_score.to_le_bytes());
                    hasher_input.push(u8::from(item.informational));
                    hasher_input.push(u8::from(item.skipped));
                }
            }
        }

        self.content_hash = xxh3_64(&hasher_input);
    }
}

/// Aggregate a raw map into a scored tree.
///
/// Pure function: depth-first post-order traversal classifying every leaf
/// and summing `score`/`max_score` at every parent. Fails closed on a
/// structurally incomplete map - no partial tree is ever returned.
pub fn aggregate(raw: &RawTestMap) -> Result<AggregatedMap> {
    if raw.parts.is_empty() {
        return Err(ReviewMapError::structure(
            "aggregating map",
            StructureErrorKind::EmptyMap,
        ));
    }

    let mut parts = IndexMap::with_capacity(raw.parts.len());
    let mut stats = ScoreSummary::default();

    for (part_id, part) in &raw.parts {
        let aggregated = aggregate_part(part)?;
        stats.absorb(aggregated.stats);
        parts.insert(part_id.clone(), aggregated);
    }

    let mut map = AggregatedMap {
        id: raw.id.clone(),
        label: raw.label.clone(),
        parts,
        stats,
        content_hash: 0,
    };
    map.calculate_content_hash();

    tracing::debug!(
        items = map.item_count(),
        score = map.stats.score,
        max_score = map.stats.max_score,
        content_hash = map.content_hash,
        "aggregated test map"
    );

    Ok(map)
}

fn aggregate_part(part: &RawTestPart) -> Result<AggregatedPart> {
    if part.sections.is_empty() {
        return Err(ReviewMapError::structure(
            "aggregating map",
            StructureErrorKind::EmptyPart(part.id.value().to_string()),
        ));
    }

    let mut sections = IndexMap::with_capacity(part.sections.len());
    let mut stats = ScoreSummary::default();

    for (section_id, section) in &part.sections {
        let aggregated = aggregate_section(section)?;
        stats.absorb(aggregated.stats);
        sections.insert(section_id.clone(), aggregated);
    }

    Ok(AggregatedPart {
        id: part.id.clone(),
        label: part.label.clone(),
        position: part.position,
        sections,
        stats,
    })
}

fn aggregate_section(section: &RawTestSection) -> Result<AggregatedSection> {
    if section.items.is_empty() {
        return Err(ReviewMapError::structure(
            "aggregating map",
            StructureErrorKind::EmptySection(section.id.value().to_string()),
        ));
    }

    let mut items = IndexMap::with_capacity(section.items.len());
    let mut stats = ScoreSummary::default();

    for (item_id, item) in &section.items {
        let aggregated = AggregatedItem::from_raw(item);
        stats.absorb(aggregated.counted_scores());
        items.insert(item_id.clone(), aggregated);
    }

    Ok(AggregatedSection {
        id: section.id.clone(),
        label: section.label.clone(),
        position: section.position,
        items,
        stats,
    })
}
