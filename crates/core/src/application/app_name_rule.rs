//! Application-name placement rule
//!
//! Picks a queue for a submission from its declared application name:
//! - first matching mapping wins (literal source or `%application`)
//! - `%application` as queue substitutes the application name
//! - resolved names are checked for ambiguity against the live topology
//! - an explicitly requested queue is kept unless overriding is enabled

use crate::domain::constants::CURRENT_APP_MAPPING;
use crate::domain::{
    ApplicationPlacementContext, ApplicationSubmission, MappingType, QueueMapping,
};
use crate::error::{AppError, Result};
use crate::port::AmbiguityChecker;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Placement rule keyed on application name
///
/// Read-only after construction; share it behind an `Arc` across
/// submission handlers.
pub struct AppNameMappingPlacementRule {
    override_with_queue_mappings: bool,
    mappings: Vec<QueueMapping>,
    queue_manager: Arc<dyn AmbiguityChecker>,
}

impl AppNameMappingPlacementRule {
    /// Create a new rule
    ///
    /// # Arguments
    /// * `override_with_queue_mappings` - Mappings beat an explicitly requested queue
    /// * `mappings` - Ordered mappings; only `Application` mappings are evaluated
    /// * `queue_manager` - Topology collaborator used for ambiguity checks
    ///
    /// # Example
    /// ```text
    /// let rule = AppNameMappingPlacementRule::new(
    ///     false,
    ///     vec![QueueMapping::application("DistributedShell", "q1")?],
    ///     Arc::new(InMemoryQueueTopology::from_paths(["root.q1"])),
    /// );
    /// ```
    pub fn new(
        override_with_queue_mappings: bool,
        mappings: Vec<QueueMapping>,
        queue_manager: Arc<dyn AmbiguityChecker>,
    ) -> Self {
        Self {
            override_with_queue_mappings,
            mappings,
            queue_manager,
        }
    }

    pub fn override_with_queue_mappings(&self) -> bool {
        self.override_with_queue_mappings
    }

    pub fn mappings(&self) -> &[QueueMapping] {
        &self.mappings
    }

    /// Decide where `submission` should go
    ///
    /// Returns:
    /// - `Ok(Some(ctx))` if a mapping applies and should be used
    /// - `Ok(None)` if no mapping applies, or the submitter's explicit
    ///   queue is kept; the original queue stands
    /// - `Err(AppError::ConfigurationResolution)` if the mapped queue is ambiguous
    ///
    /// `user` is only used for logging.
    pub fn get_placement_for_app(
        &self,
        submission: &ApplicationSubmission,
        user: &str,
    ) -> Result<Option<ApplicationPlacementContext>> {
        let application_name = submission.application_name();

        let Some(mapped) = self.get_app_placement_context(application_name)? else {
            debug!(
                application = ?application_name,
                user = %user,
                "No application mapping matched"
            );
            return Ok(None);
        };

        // Requested queue equal to the mapped one (e.g. on recovery) is not a conflict
        if submission.has_explicit_queue()
            && submission.queue != mapped.queue()
            && submission.queue != mapped.full_path()
            && !self.override_with_queue_mappings
        {
            debug!(
                application = ?application_name,
                user = %user,
                requested_queue = %submission.queue,
                mapped_queue = %mapped.queue(),
                "Keeping user-requested queue"
            );
            return Ok(None);
        }

        info!(
            application = ?application_name,
            user = %user,
            requested_queue = %submission.queue,
            mapped_queue = %mapped.full_path(),
            override_with_queue_mappings = self.override_with_queue_mappings,
            "Application mapped to queue"
        );

        Ok(Some(mapped))
    }

    /// First matching mapping, resolved and validated
    fn get_app_placement_context(
        &self,
        application_name: Option<&str>,
    ) -> Result<Option<ApplicationPlacementContext>> {
        for mapping in &self.mappings {
            match mapping.mapping_type() {
                MappingType::Application => {}
                MappingType::User | MappingType::Group => continue,
            }

            let matches = mapping.source() == CURRENT_APP_MAPPING
                || application_name == Some(mapping.source());
            if !matches {
                continue;
            }

            let leaf = if mapping.queue() == CURRENT_APP_MAPPING {
                match application_name {
                    Some(name) => name,
                    None => {
                        debug!(
                            mapping = %mapping,
                            "Mapping needs an application name but none was given"
                        );
                        return Ok(None);
                    }
                }
            } else {
                mapping.queue()
            };

            return self.get_placement_context(mapping, leaf, application_name);
        }

        Ok(None)
    }

    /// Build the decision for `leaf`, rejecting ambiguous references
    fn get_placement_context(
        &self,
        mapping: &QueueMapping,
        leaf: &str,
        application_name: Option<&str>,
    ) -> Result<Option<ApplicationPlacementContext>> {
        let context = match mapping.parent_queue() {
            Some(parent) => ApplicationPlacementContext::with_parent(leaf, parent),
            None => ApplicationPlacementContext::new(leaf),
        };

        // A full path names one queue; a bare leaf may name several
        let reference = context.full_path();
        if self.queue_manager.is_ambiguous(&reference) {
            warn!(
                application = ?application_name,
                mapping = %mapping,
                queue = %reference,
                "Mapping contains ambiguous queue reference"
            );
            return Err(AppError::ConfigurationResolution {
                application: application_name.unwrap_or_default().to_string(),
                queue: reference,
            });
        }

        Ok(Some(context))
    }
}
