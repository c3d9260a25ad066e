//! Error types for the GPS planner.
//!
//! Planning failure is not an error: it is reported through
//! [`Outcome::Failure`](crate::Outcome). These variants cover malformed input
//! and problem loading.

use thiserror::Error;

/// Main error type for GPS operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpsError {
    /// An operation definition is malformed.
    #[error("Invalid operation '{action}': {message}")]
    InvalidOperation { action: String, message: String },

    /// A problem definition is malformed.
    #[error("Invalid problem '{problem}': {message}")]
    InvalidProblem { problem: String, message: String },

    /// Resource not found.
    #[error("Resource not found: {resource_type} '{id}'")]
    NotFound { resource_type: String, id: String },

    /// The problem source is neither a known name nor a supported file.
    #[error("{path} is not a supported problem definition (expected a .json file)")]
    UnsupportedFormat { path: String },

    /// Filesystem error while reading a problem source.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GpsError {
    /// Process exit code for a driver that failed with this error.
    pub fn status_code(&self) -> u8 {
        match self {
            GpsError::UnsupportedFormat { .. } => 1,
            GpsError::NotFound { .. } => 2,
            _ => 3,
        }
    }
}

/// Convenience Result type for GPS operations.
pub type Result<T> = std::result::Result<T, GpsError>;

impl From<serde_json::Error> for GpsError {
    fn from(err: serde_json::Error) -> Self {
        GpsError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for GpsError {
    fn from(err: std::io::Error) -> Self {
        GpsError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let unsupported = GpsError::UnsupportedFormat {
            path: "problem.yaml".to_string(),
        };
        let missing = GpsError::NotFound {
            resource_type: "problem".to_string(),
            id: "towers".to_string(),
        };
        assert_eq!(unsupported.status_code(), 1);
        assert_eq!(missing.status_code(), 2);
        assert_eq!(GpsError::Io("denied".to_string()).status_code(), 3);
    }

    #[test]
    fn test_definition_errors_share_status() {
        let invalid = GpsError::InvalidOperation {
            action: String::new(),
            message: "action name cannot be empty".to_string(),
        };
        assert_eq!(invalid.status_code(), 3);
        assert_eq!(
            invalid.to_string(),
            "Invalid operation '': action name cannot be empty"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GpsError = err.into();
        assert!(matches!(err, GpsError::SerializationError(_)));
    }
}
