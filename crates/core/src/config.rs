//! Placement configuration
//!
//! Loaded once at startup from JSON or environment variables:
//!
//! ```text
//! PLACEMENT_QUEUE_MAPPINGS="a:DistributedShell:q1,a:%application:%application"
//! PLACEMENT_OVERRIDE_QUEUE_MAPPINGS=true
//! ```

use crate::application::AppNameMappingPlacementRule;
use crate::domain::constants::{
    ENV_OVERRIDE_QUEUE_MAPPINGS, ENV_QUEUE_MAPPINGS, MAPPING_LIST_DELIMITER,
};
use crate::domain::QueueMapping;
use crate::error::{AppError, Result};
use crate::port::AmbiguityChecker;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Placement configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Mappings beat an explicitly requested queue
    #[serde(default)]
    pub override_with_queue_mappings: bool,

    /// Ordered mappings, `type:source:queue` each
    #[serde(default)]
    pub mappings: Vec<QueueMapping>,
}

impl PlacementConfig {
    /// Parse JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from process environment; unset variables keep defaults
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_OVERRIDE_QUEUE_MAPPINGS) {
            config.override_with_queue_mappings = raw.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be 'true' or 'false', got '{}'",
                    ENV_OVERRIDE_QUEUE_MAPPINGS, raw
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_QUEUE_MAPPINGS) {
            config.mappings = parse_mappings(&raw)?;
        }

        tracing::debug!(
            mappings = config.mappings.len(),
            override_with_queue_mappings = config.override_with_queue_mappings,
            "Placement configuration loaded"
        );

        Ok(config)
    }

    /// Build the placement rule for this configuration
    pub fn build_rule(&self, queue_manager: Arc<dyn AmbiguityChecker>) -> AppNameMappingPlacementRule {
        AppNameMappingPlacementRule::new(
            self.override_with_queue_mappings,
            self.mappings.clone(),
            queue_manager,
        )
    }
}

/// Parse a comma-separated mapping list, skipping empty entries
pub fn parse_mappings(raw: &str) -> Result<Vec<QueueMapping>> {
    raw.split(MAPPING_LIST_DELIMITER)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse::<QueueMapping>().map_err(AppError::from))
        .collect()
}
