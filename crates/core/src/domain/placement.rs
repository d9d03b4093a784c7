// Placement Decision

use serde::{Deserialize, Serialize};

use crate::domain::constants::QUEUE_PATH_SEPARATOR;

/// Where an application should be placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPlacementContext {
    queue: String,
    parent_queue: Option<String>,
}

impl ApplicationPlacementContext {
    pub fn new(queue: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            parent_queue: None,
        }
    }

    pub fn with_parent(queue: impl Into<String>, parent_queue: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            parent_queue: Some(parent_queue.into()),
        }
    }

    /// Leaf queue name
    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn parent_queue(&self) -> Option<&str> {
        self.parent_queue.as_deref()
    }

    pub fn has_parent_queue(&self) -> bool {
        self.parent_queue.is_some()
    }

    /// `parent.leaf`, or just the leaf when no parent was mapped
    pub fn full_path(&self) -> String {
        match &self.parent_queue {
            Some(parent) => format!("{}{}{}", parent, QUEUE_PATH_SEPARATOR, self.queue),
            None => self.queue.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path() {
        let leaf_only = ApplicationPlacementContext::new("q1");
        assert!(!leaf_only.has_parent_queue());
        assert_eq!(leaf_only.full_path(), "q1");

        let nested = ApplicationPlacementContext::with_parent("q1", "root.apps");
        assert!(nested.has_parent_queue());
        assert_eq!(nested.parent_queue(), Some("root.apps"));
        assert_eq!(nested.full_path(), "root.apps.q1");
    }
}
