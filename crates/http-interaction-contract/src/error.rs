use thiserror::Error;

/// Errors raised while describing or exporting an interaction
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "regex")]
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
