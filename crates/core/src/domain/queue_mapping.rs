// Queue Mapping Domain Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::constants::{MAPPING_FIELD_DELIMITER, QUEUE_PATH_SEPARATOR};
use crate::domain::error::{DomainError, Result};

/// Mapping category (which submission attribute a rule keys on)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingType {
    User,
    Group,
    Application,
}

impl std::fmt::Display for MappingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingType::User => write!(f, "u"),
            MappingType::Group => write!(f, "g"),
            MappingType::Application => write!(f, "a"),
        }
    }
}

impl FromStr for MappingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "u" => Ok(MappingType::User),
            "g" => Ok(MappingType::Group),
            "a" => Ok(MappingType::Application),
            other => Err(DomainError::UnknownMappingType(other.to_string())),
        }
    }
}

/// A configured placement rule: `source` pattern -> `queue` pattern.
///
/// Immutable once built. A dotted queue (`root.apps.q1`) is split into
/// a parent path (`root.apps`) and a leaf (`q1`).
///
/// Serializes as its text form, `type:source:queue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QueueMapping {
    mapping_type: MappingType,
    source: String,
    queue: String,
    parent_queue: Option<String>,
}

impl QueueMapping {
    /// Create a new mapping
    ///
    /// # Arguments
    ///
    /// * `mapping_type` - Rule category
    /// * `source` - Source pattern (literal name or `%application`)
    /// * `queue` - Target queue pattern, optionally prefixed by a parent path
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidMapping` if `source` or any queue path segment
    /// is empty.
    pub fn new(
        mapping_type: MappingType,
        source: impl Into<String>,
        queue: impl Into<String>,
    ) -> Result<Self> {
        let source = source.into();
        let queue = queue.into();

        if source.is_empty() {
            return Err(DomainError::InvalidMapping(format!(
                "empty source in mapping to '{}'",
                queue
            )));
        }
        if queue.is_empty() {
            return Err(DomainError::InvalidMapping(format!(
                "empty queue in mapping from '{}'",
                source
            )));
        }

        let (parent_queue, leaf) = match queue.rsplit_once(QUEUE_PATH_SEPARATOR) {
            Some((parent, leaf)) => {
                if parent.is_empty() || leaf.is_empty() {
                    return Err(DomainError::InvalidMapping(format!(
                        "malformed queue path '{}'",
                        queue
                    )));
                }
                (Some(parent.to_string()), leaf.to_string())
            }
            None => (None, queue),
        };

        Ok(Self {
            mapping_type,
            source,
            queue: leaf,
            parent_queue,
        })
    }

    /// Shorthand for an `Application` mapping
    pub fn application(source: impl Into<String>, queue: impl Into<String>) -> Result<Self> {
        Self::new(MappingType::Application, source, queue)
    }

    pub fn mapping_type(&self) -> MappingType {
        self.mapping_type
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Leaf queue pattern (without parent path)
    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn parent_queue(&self) -> Option<&str> {
        self.parent_queue.as_deref()
    }

    pub fn has_parent_queue(&self) -> bool {
        self.parent_queue.is_some()
    }

    /// Queue pattern including the parent path, as configured
    pub fn full_path(&self) -> String {
        match &self.parent_queue {
            Some(parent) => format!("{}{}{}", parent, QUEUE_PATH_SEPARATOR, self.queue),
            None => self.queue.clone(),
        }
    }
}

impl std::fmt::Display for QueueMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.mapping_type,
            MAPPING_FIELD_DELIMITER,
            self.source,
            MAPPING_FIELD_DELIMITER,
            self.full_path()
        )
    }
}

impl FromStr for QueueMapping {
    type Err = DomainError;

    /// Parse `type:source:queue` (e.g. `a:DistributedShell:root.q1`)
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.trim().split(MAPPING_FIELD_DELIMITER).collect();
        match fields.as_slice() {
            [mapping_type, source, queue] => {
                Self::new(mapping_type.trim().parse()?, source.trim(), queue.trim())
            }
            _ => Err(DomainError::InvalidMapping(format!(
                "expected 'type:source:queue', got '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for QueueMapping {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<QueueMapping> for String {
    fn from(mapping: QueueMapping) -> Self {
        mapping.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_application_mapping() {
        let mapping = QueueMapping::application("DistributedShell", "q1").unwrap();

        assert_eq!(mapping.mapping_type(), MappingType::Application);
        assert_eq!(mapping.source(), "DistributedShell");
        assert_eq!(mapping.queue(), "q1");
        assert!(!mapping.has_parent_queue());
        assert_eq!(mapping.full_path(), "q1");
    }

    #[test]
    fn test_parent_path_is_split_off() {
        let mapping = QueueMapping::application("%application", "root.apps.%application").unwrap();

        assert_eq!(mapping.queue(), "%application");
        assert_eq!(mapping.parent_queue(), Some("root.apps"));
        assert_eq!(mapping.full_path(), "root.apps.%application");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            QueueMapping::application("", "q1"),
            Err(DomainError::InvalidMapping(_))
        ));
        assert!(matches!(
            QueueMapping::application("app", ""),
            Err(DomainError::InvalidMapping(_))
        ));
        assert!(matches!(
            QueueMapping::application("app", "root."),
            Err(DomainError::InvalidMapping(_))
        ));
        assert!(matches!(
            QueueMapping::application("app", ".q1"),
            Err(DomainError::InvalidMapping(_))
        ));
    }

    #[test]
    fn test_parse_text_form() {
        let mapping: QueueMapping = "a:DistributedShell:root.q1".parse().unwrap();

        assert_eq!(mapping.mapping_type(), MappingType::Application);
        assert_eq!(mapping.source(), "DistributedShell");
        assert_eq!(mapping.queue(), "q1");
        assert_eq!(mapping.parent_queue(), Some("root"));
        assert_eq!(mapping.to_string(), "a:DistributedShell:root.q1");
    }

    #[test]
    fn test_parse_user_and_group_types() {
        let user: QueueMapping = "u:alice:q1".parse().unwrap();
        let group: QueueMapping = " g : eng : q2 ".parse().unwrap();

        assert_eq!(user.mapping_type(), MappingType::User);
        assert_eq!(group.mapping_type(), MappingType::Group);
        assert_eq!(group.source(), "eng");
        assert_eq!(group.queue(), "q2");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x:app:q1".parse::<QueueMapping>(),
            Err(DomainError::UnknownMappingType("x".to_string()))
        );
        assert!(matches!(
            "a:app".parse::<QueueMapping>(),
            Err(DomainError::InvalidMapping(_))
        ));
        assert!(matches!(
            "a:app:q1:extra".parse::<QueueMapping>(),
            Err(DomainError::InvalidMapping(_))
        ));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let mapping = QueueMapping::application("app", "root.q1").unwrap();

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, "\"a:app:root.q1\"");

        let back: QueueMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);

        assert!(serde_json::from_str::<QueueMapping>("\"a::q1\"").is_err());
    }
}
