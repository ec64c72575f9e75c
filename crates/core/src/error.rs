//! Error types for Widget Manager
//!
//! Unified error handling for the core crate: configuration problems,
//! validation failures, and the duplicate-name conflict the collection
//! manager enforces client-side.

use std::path::PathBuf;
use thiserror::Error;

/// The core error type for Widget Manager.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field-level validation failure (messages joined when several).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A widget with the same name (case-insensitive) already exists.
    #[error("Widget with name \"{0}\" already exists. Please choose another name.")]
    DuplicateWidget(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },
}

impl CoreError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    /// Create a duplicate-widget conflict error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        CoreError::DuplicateWidget(name.into())
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CoreError::InvalidConfig(msg.into())
    }

    /// Check if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }

    /// Check if this error is the duplicate-name conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::DuplicateWidget(_))
    }

    /// Check if this error is configuration-related.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidConfig(_) | CoreError::ConfigRead { .. }
        )
    }
}

/// Result type alias using CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = CoreError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_conflict());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_duplicate_widget_message() {
        let err = CoreError::duplicate("Solar Lamp");
        assert!(err.is_conflict());
        assert_eq!(
            err.to_string(),
            "Widget with name \"Solar Lamp\" already exists. Please choose another name."
        );
    }

    #[test]
    fn test_config_errors() {
        let err = CoreError::invalid_config("base_url must not be empty");
        assert!(err.is_config());
        assert!(!err.is_validation());

        let err = CoreError::ConfigRead {
            path: PathBuf::from("widget-manager.toml"),
            message: "permission denied".to_string(),
        };
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Failed to read config file 'widget-manager.toml': permission denied"
        );
    }
}
