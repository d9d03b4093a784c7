// Application Submission (consumed by placement, owned by the caller)

use serde::{Deserialize, Serialize};

use crate::domain::constants::DEFAULT_QUEUE_NAME;
use crate::domain::placement::ApplicationPlacementContext;

/// The parts of a job submission that placement reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    /// Declared application name (may be absent)
    pub application_name: Option<String>,

    /// Requested queue; empty or `default` means none was requested
    #[serde(default = "default_queue")]
    pub queue: String,
}

fn default_queue() -> String {
    DEFAULT_QUEUE_NAME.to_string()
}

impl ApplicationSubmission {
    /// Create a submission that requests no particular queue
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: Some(application_name.into()),
            queue: default_queue(),
        }
    }

    /// Create a submission with an explicit requested queue
    pub fn with_queue(application_name: impl Into<String>, queue: impl Into<String>) -> Self {
        Self {
            application_name: Some(application_name.into()),
            queue: queue.into(),
        }
    }

    /// Application name, treating an empty name as absent
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref().filter(|name| !name.is_empty())
    }

    /// True if the submitter asked for a specific queue
    pub fn has_explicit_queue(&self) -> bool {
        !self.queue.is_empty() && self.queue != DEFAULT_QUEUE_NAME
    }

    /// Write a placement decision back into the requested queue
    ///
    /// A mapped parent path is kept so the queue stays unambiguous.
    pub fn apply_placement(&mut self, placement: &ApplicationPlacementContext) {
        self.queue = placement.full_path();
    }
}
