//! Unified error types for review-map.
//!
//! All data-model operations fail synchronously from the call that caused
//! the problem, and a failed write never leaves partial state behind.

use thiserror::Error;

/// Main error type for review-map operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReviewMapError {
    /// Malformed raw map (missing required collection at some level)
    #[error("Malformed test map: {context}")]
    Structure {
        context: String,
        #[source]
        source: StructureErrorKind,
    },

    /// Two nodes share an identifier somewhere in the tree
    #[error("Duplicate node id '{id}' while {context}")]
    DuplicateId { id: String, context: String },

    /// An unknown filter identifier was requested by the UI layer
    #[error("Unknown filter '{name}'")]
    InvalidPredicate { name: String },

    /// Navigation could not resolve any target position
    #[error("Navigation failed: {context}")]
    Navigation { context: String },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific structural error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StructureErrorKind {
    #[error("test map contains no parts")]
    EmptyMap,

    #[error("part '{0}' contains no sections")]
    EmptyPart(String),

    #[error("section '{0}' contains no items")]
    EmptySection(String),
}

/// Convenient Result type for review-map operations
pub type Result<T> = std::result::Result<T, ReviewMapError>;

impl ReviewMapError {
    /// Create a structure error with context
    pub fn structure(context: impl Into<String>, source: StructureErrorKind) -> Self {
        Self::Structure {
            context: context.into(),
            source,
        }
    }

    /// Create a duplicate-id error
    pub fn duplicate_id(id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            context: context.into(),
        }
    }

    /// Create an unknown-filter error
    pub fn invalid_predicate(name: impl Into<String>) -> Self {
        Self::InvalidPredicate { name: name.into() }
    }

    /// Create a navigation error
    pub fn navigation(context: impl Into<String>) -> Self {
        Self::Navigation {
            context: context.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
