//! Named review filters.
//!
//! The review toolbar exposes a fixed set of filters over item status.
//! Each filter is both a predicate over [`FlatItem`]s and a cyclable
//! toolbar entry with a stable identifier and display label.

use crate::error::{ReviewMapError, Result};
use crate::model::FlatItem;
use serde::{Deserialize, Serialize};

/// Predicate selecting which items stay visible in the review panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReviewFilter {
    /// Identity filter: every item is retained
    #[default]
    All,
    /// Scored items that did not reach full score (skipped included)
    Incorrect,
    /// Items the test-taker gave no response to
    Skipped,
    /// Items the test-taker responded to
    Answered,
    /// Informational items only
    Informational,
}

impl ReviewFilter {
    /// Stable identifier, used by the UI layer to select a filter
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Incorrect => "incorrect",
            Self::Skipped => "skipped",
            Self::Answered => "answered",
            Self::Informational => "informational",
        }
    }

    /// Resolve a filter from its identifier.
    ///
    /// Unknown identifiers are a caller error and fail before any state
    /// is touched.
    pub fn from_id(name: &str) -> Result<Self> {
        match name {
            "all" => Ok(Self::All),
            "incorrect" => Ok(Self::Incorrect),
            "skipped" => Ok(Self::Skipped),
            "answered" => Ok(Self::Answered),
            "informational" => Ok(Self::Informational),
            other => Err(ReviewMapError::invalid_predicate(other)),
        }
    }

    /// Get a display name for the filter
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Incorrect => "Incorrect",
            Self::Skipped => "Unanswered",
            Self::Answered => "Answered",
            Self::Informational => "Informational",
        }
    }

    /// Whether an item passes this filter
    #[must_use]
    pub fn matches(&self, item: &FlatItem) -> bool {
        match self {
            Self::All => true,
            Self::Incorrect => !item.informational && item.score != item.max_score,
            Self::Skipped => !item.informational && item.skipped,
            Self::Answered => !item.informational && !item.skipped,
            Self::Informational => item.informational,
        }
    }

    /// Get the next filter in toolbar cycle order
    #[must_use]
    pub const fn next_filter(&self) -> Self {
        match self {
            Self::All => Self::Incorrect,
            Self::Incorrect => Self::Skipped,
            Self::Skipped => Self::Answered,
            Self::Answered => Self::Informational,
            Self::Informational => Self::All,
        }
    }

    /// Get the previous filter in toolbar cycle order
    #[must_use]
    pub const fn prev_filter(&self) -> Self {
        match self {
            Self::All => Self::Informational,
            Self::Incorrect => Self::All,
            Self::Skipped => Self::Incorrect,
            Self::Answered => Self::Skipped,
            Self::Informational => Self::Answered,
        }
    }
}

impl std::fmt::Display for ReviewFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
