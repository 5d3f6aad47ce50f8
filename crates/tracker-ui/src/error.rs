//! Error types for the tracker front-end
//!
//! Wraps core tracker errors and converts them for the JS boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur in the tracker front-end
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Rendering or journey validation failed
    #[error(transparent)]
    Tracker(#[from] tracker_core::Error),
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        Self::from_str(&error.to_string())
    }
}

/// Result type alias for front-end operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::from(tracker_core::Error::mount_failed("no element matches '.tracker'"));
        assert_eq!(
            error.to_string(),
            "failed to mount tracker: no element matches '.tracker'"
        );
    }

    #[test]
    fn test_error_keeps_core_variant() {
        let error = UiError::from(tracker_core::Error::invalid_input("got 1 checkpoint"));
        assert!(matches!(
            error,
            UiError::Tracker(tracker_core::Error::InvalidInput { .. })
        ));
        assert_eq!(error.to_string(), "invalid input: got 1 checkpoint");
    }
}
