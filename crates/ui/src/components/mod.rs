//! # UI Components
//!
//! Reusable Dioxus components for the Widget Manager interface:
//! - **Widget Card**: stateless display of a single widget with
//!   edit/delete callbacks
//! - **Inputs**: form input components (text input, text area)
//! - **Dialogs**: modal dialogs for create, update, delete confirmation,
//!   and blocking alerts

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod widget_card;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::{AlertDialog, ConfirmDeleteDialog, CreateWidgetDialog, UpdateWidgetDialog};
pub use inputs::{TextArea, TextInput};
pub use widget_card::WidgetCard;
