//! # Widget API
//!
//! HTTP client for the remote widget API.
//!
//! Wraps the five remote operations (list all, create, update, delete,
//! search by name) over HTTP with JSON payloads, translating transport
//! failures and non-2xx responses into [`ClientError`].

pub mod client;

// Re-exports for convenience
pub use client::{ClientError, WidgetApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
