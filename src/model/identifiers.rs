//! Node identifiers for test maps.
//!
//! Backend producers only guarantee uniqueness among siblings; global
//! uniqueness across the whole map is validated at flatten time, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a part, section, or item in a test map.
///
/// A thin newtype over the backend-supplied string id. Used as the key of
/// every id-keyed collection in the model, so it must stay cheap to clone
/// and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new node id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying string value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
