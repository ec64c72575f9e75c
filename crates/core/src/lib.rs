//! # Widget Core
//!
//! Core model, validation, and configuration for Widget Manager.
//!
//! This crate provides the foundational building blocks used throughout
//! the Widget Manager workspace:
//!
//! - **Widget**: the catalog item entity and its draft form model
//! - **Validation**: pure per-field validators and the typed error record
//! - **Config**: the remote API endpoint configuration
//! - **Errors**: unified error handling with `CoreError` and `CoreResult`

pub mod config;
pub mod error;
pub mod validation;
pub mod widget;

// Re-export commonly used items at crate root
pub use config::ApiConfig;
pub use error::{CoreError, CoreResult};
pub use validation::{Field, FieldErrors, validate};
pub use widget::{Widget, WidgetDraft};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
