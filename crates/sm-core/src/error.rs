//! Error types for the slot machine

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum SmError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid ante: {0}")]
    InvalidAnte(String),

    #[error("Unknown symbol index: {0}")]
    UnknownSymbol(u8),
}

impl From<serde_json::Error> for SmError {
    fn from(err: serde_json::Error) -> Self {
        SmError::Serialization(err.to_string())
    }
}

/// Result type alias
pub type SmResult<T> = Result<T, SmError>;
