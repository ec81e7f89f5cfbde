//! Error types for cn-hub

use thiserror::Error;

/// Hub errors
///
/// Deriving a [`HubConfig`](super::HubConfig) never fails; these cover the
/// surrounding configuration and output layers.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl HubError {
    pub fn validation(msg: impl Into<String>) -> Self {
        HubError::ValidationError(msg.into())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for HubError {
    fn from(err: config::ConfigError) -> Self {
        HubError::ConfigError(err.to_string())
    }
}

/// Result type for hub operations
pub type HubResult<T> = Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HubError::validation("unknown output format: yaml");
        assert_eq!(err.to_string(), "Validation error: unknown output format: yaml");

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(HubError::from(json), HubError::SerializationError(_)));
    }
}
