// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    /// Resolved queue name is ambiguous in the current topology.
    /// Non-retryable: this is an administrator configuration defect.
    #[error(
        "Failed to place application {application}: mapping contains ambiguous leaf queue reference {queue}"
    )]
    ConfigurationResolution { application: String, queue: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
