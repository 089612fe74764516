//! Unified error hierarchy for FightCamp
//!
//! The projection and recovery engines are infallible; errors only arise at
//! the edges (session import, report export, configuration, and caller-side
//! input validation).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all FightCamp operations
#[derive(Debug, Error)]
pub enum FightCampError {
    /// Input rejected by caller-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Report serialization errors
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Session import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// File not found at specified path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Unsupported file extension
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Format-specific parsing error
    #[error("Parse error in {format}: {reason}")]
    ParseError { format: String, reason: String },

    /// A row parsed but holds an impossible value
    #[error("Invalid session {id}: {reason}")]
    InvalidSession { id: String, reason: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be parsed
    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// Config could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// Unknown key passed to get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value does not fit the key
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Result type alias for FightCamp operations
pub type Result<T> = std::result::Result<T, FightCampError>;

impl FightCampError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FightCampError::Validation(_) => ErrorSeverity::Warning,
            FightCampError::Import(ImportError::InvalidSession { .. }) => ErrorSeverity::Warning,
            FightCampError::Configuration(ConfigError::UnknownKey(_)) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FightCampError::Import(ImportError::FileNotFound { path }) => {
                format!("Could not find session file: {}", path.display())
            }
            FightCampError::Import(ImportError::UnsupportedFormat { format }) => {
                format!("Session files must be .json or .csv, got '{}'", format)
            }
            FightCampError::Validation(reason) => {
                format!("Please check your inputs: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents the operation
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FightCampError::Validation("bad weight".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = FightCampError::Import(ImportError::ParseError {
            format: "csv".to_string(),
            reason: "bad row".to_string(),
        });
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_user_messages() {
        let err = FightCampError::Import(ImportError::FileNotFound {
            path: PathBuf::from("sessions.json"),
        });
        assert!(err.user_message().contains("Could not find"));

        let err = FightCampError::Configuration(ConfigError::UnknownKey("foo".to_string()));
        assert_eq!(err.user_message(), "Configuration error: Unknown configuration key: foo");
    }
}
