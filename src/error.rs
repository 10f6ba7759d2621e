//! Error handling module for pagedash
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Missing documents never surface here: the config store recreates them.
//! Everything else aborts the current interaction cycle.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for pagedash
#[derive(Error, Debug)]
pub enum DashError {
    /// IO errors on a specific document or directory
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document exists but is not valid TOML for its schema
    #[error("Malformed configuration in {path}: {source}")]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A document could not be serialized back to TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Validation errors (user input in forms)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for pagedash operations
pub type Result<T> = std::result::Result<T, DashError>;

// Convenient error constructors
impl DashError {
    /// Create an IO error bound to a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse failure for a document
    pub fn malformed(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        Self::ConfigMalformed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// True when the error is a parse failure the user has to fix by hand
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::ConfigMalformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::validation("primary color must be #RRGGBB");
        assert_eq!(
            err.to_string(),
            "Validation error: primary color must be #RRGGBB"
        );

        let err = DashError::terminal("no tty");
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }

    #[test]
    fn test_io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DashError::io("/tmp/app_config.toml", io_err);
        assert!(matches!(err, DashError::Io { .. }));
        assert!(err.to_string().contains("/tmp/app_config.toml"));
    }

    #[test]
    fn test_malformed_is_detected() {
        let parse_err = toml::from_str::<toml::Table>("theme = [").unwrap_err();
        let err = DashError::malformed("config.toml", parse_err);
        assert!(err.is_malformed());
        assert!(!DashError::validation("x").is_malformed());
    }
}
