// Port Layer - Interfaces for external dependencies

pub mod ambiguity_checker;

// Re-exports
pub use ambiguity_checker::AmbiguityChecker;
