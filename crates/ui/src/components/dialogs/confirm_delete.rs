//! # Confirm Delete Dialog
//!
//! Confirmation dialog for deleting a widget. Confirming closes the dialog
//! before the request goes out; a failure surfaces through the blocking
//! alert and leaves the collection untouched. Declining closes the dialog
//! with no side effects.

use dioxus::prelude::*;

use crate::api;
use crate::pages::catalog::refresh_filtered;
use crate::state::{APP_STATE, DeleteDialog, show_notice};

// ============================================================================
// Main Component
// ============================================================================

/// Delete confirmation dialog
#[component]
pub fn ConfirmDeleteDialog() -> Element {
    let widget = match &APP_STATE.read().delete_dialog {
        DeleteDialog::Open { widget } => widget.clone(),
        DeleteDialog::Closed => return rsx! {},
    };

    rsx! {
        div {
            class: "dialog-body",

            div {
                class: "dialog-header-row",
                span { class: "dialog-icon dialog-icon-warning", "⚠" }
                h2 { class: "dialog-title", "Confirm Deletion" }
            }

            p {
                class: "dialog-message",
                "Are you sure you want to delete \"{widget.name}\"?"
            }

            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| {
                        APP_STATE.write().delete_dialog.close();
                    },
                    "Cancel"
                }

                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: move |_| confirm_delete(),
                    "Delete"
                }
            }
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Confirm the deletion of the selected widget.
fn confirm_delete() {
    let widget = match &APP_STATE.read().delete_dialog {
        DeleteDialog::Open { widget } => widget.clone(),
        DeleteDialog::Closed => return,
    };

    // Close before the request goes out; failures surface via the alert.
    APP_STATE.write().delete_dialog.close();

    spawn(async move {
        match api().remove(&widget.name).await {
            Ok(()) => {
                tracing::info!("Deleted widget '{}'", widget.name);
                APP_STATE.write().remove_widget(&widget.name);
                show_notice(format!("Widget '{}' deleted successfully!", widget.name));
                refresh_filtered();
            }
            Err(e) => {
                tracing::error!("Failed to delete widget '{}': {}", widget.name, e);
                APP_STATE
                    .write()
                    .show_remote_error(format!("Failed to delete widget: {}", e.user_message()));
            }
        }
    });
}
