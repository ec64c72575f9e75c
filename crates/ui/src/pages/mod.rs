//! # Pages
//!
//! Top-level pages of the Widget Manager UI. The catalog page is the
//! collection manager: it owns the load, search, and mutation flows.

pub mod catalog;

pub use catalog::CatalogPage;
