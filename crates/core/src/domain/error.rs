// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid queue mapping: {0}")]
    InvalidMapping(String),

    #[error("Unknown mapping type: {0}")]
    UnknownMappingType(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
