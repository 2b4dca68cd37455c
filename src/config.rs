//! Configuration for the review panel surface.
//!
//! The host application hands the panel a JSON options blob; this module
//! gives it a typed, validated shape. Only options the data model cares
//! about live here - purely visual options stay with the UI layer.

use crate::filter::ReviewFilter;
use serde::{Deserialize, Serialize};

/// Options the review panel consumes from its host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPanelConfig {
    /// Show the rolled-up score header
    pub show_score: bool,
    /// Show correct answers when reviewing an item
    pub show_correct: bool,
    /// Render section titles between item groups
    pub display_section_titles: bool,
    /// Filter preselected when the panel opens
    pub default_filter: ReviewFilter,
    /// Filters offered by the toolbar, as filter identifiers
    pub available_filters: Vec<String>,
}

impl Default for ReviewPanelConfig {
    fn default() -> Self {
        Self {
            show_score: true,
            show_correct: true,
            display_section_titles: true,
            default_filter: ReviewFilter::All,
            available_filters: vec!["all".to_string(), "incorrect".to_string()],
        }
    }
}

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for ReviewPanelConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.available_filters.is_empty() {
            errors.push(ConfigError {
                field: "available_filters".to_string(),
                message: "at least one filter must be offered".to_string(),
            });
        }

        for name in &self.available_filters {
            if ReviewFilter::from_id(name).is_err() {
                errors.push(ConfigError {
                    field: "available_filters".to_string(),
                    message: format!("unknown filter '{name}'"),
                });
            }
        }

        if !self
            .available_filters
            .iter()
            .any(|name| name == self.default_filter.id())
        {
            errors.push(ConfigError {
                field: "default_filter".to_string(),
                message: format!(
                    "default filter '{}' is not among the available filters",
                    self.default_filter.id()
                ),
            });
        }

        errors
    }
}
