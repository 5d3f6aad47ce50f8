//! Core error types for tracker operations using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for tracker operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Input errors
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("config parse error: {reason}")]
    ConfigParseFailed { reason: String },

    #[error("invalid config: {reason}")]
    ConfigInvalid { reason: String },

    // I/O errors
    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    #[error("failed to write file '{path}': {reason}")]
    FileWriteFailed { path: PathBuf, reason: String },

    // Surface errors
    #[error("failed to mount tracker: {reason}")]
    MountFailed { reason: String },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn config_invalid(reason: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            reason: reason.into(),
        }
    }

    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a file write error.
    pub fn file_write_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileWriteFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a mount error.
    pub fn mount_failed(reason: impl Into<String>) -> Self {
        Self::MountFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::invalid_input("need at least 2 checkpoints, got 1");
        assert_eq!(
            error.to_string(),
            "invalid input: need at least 2 checkpoints, got 1"
        );

        let error = Error::file_read_failed("journey.json", "not found");
        assert_eq!(
            error.to_string(),
            "failed to read file 'journey.json': not found"
        );

        let error = Error::mount_failed("no element matches '.tracker'");
        assert_eq!(
            error.to_string(),
            "failed to mount tracker: no element matches '.tracker'"
        );
    }
}
