// Domain Layer - Pure business logic and entities

pub mod constants;
pub mod error;
pub mod placement;
pub mod queue_mapping;
pub mod submission;

// Re-exports
pub use error::DomainError;
pub use placement::ApplicationPlacementContext;
pub use queue_mapping::{MappingType, QueueMapping};
pub use submission::ApplicationSubmission;
