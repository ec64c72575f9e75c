//! Main Application Component for Widget Manager
//!
//! This module contains the root Dioxus component: the header, the catalog
//! page, and the modal overlay that renders whichever dialog state machine
//! is currently open. The blocking alert stacks above the form dialogs, so
//! a conflict can be shown while the create dialog stays open underneath.

use dioxus::prelude::*;

use crate::components::dialogs::{
    AlertDialog, ConfirmDeleteDialog, CreateWidgetDialog, UpdateWidgetDialog,
};
use crate::pages::CatalogPage;
use crate::state::APP_STATE;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Widget Manager UI initialized");
    });

    rsx! {
        div {
            class: "app-container",

            Header {}

            main {
                class: "app-content",
                CatalogPage {}
            }

            DialogOverlay {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top header with the application title and catalog size
#[component]
fn Header() -> Element {
    let count = APP_STATE.read().widgets.len();

    rsx! {
        header {
            class: "app-header",
            span { class: "app-title", "Widget Manager" }
            span {
                class: "app-subtitle",
                if count == 1 {
                    "1 widget in catalog"
                } else {
                    "{count} widgets in catalog"
                }
            }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
///
/// At most one form dialog (create/update/delete) is open at a time; the
/// alert renders in its own layer above them.
#[component]
fn DialogOverlay() -> Element {
    let state = APP_STATE.read();
    let create_open = state.create_dialog.is_open();
    let update_open = state.update_dialog.is_open();
    let delete_open = state.delete_dialog.is_open();
    let alert = state.alert.clone();
    drop(state);

    let form_open = create_open || update_open || delete_open;
    if !form_open && alert.is_none() {
        return rsx! {};
    }

    rsx! {
        if form_open {
            div {
                class: "dialog-overlay",

                // Backdrop
                div {
                    class: "dialog-backdrop",
                    onclick: move |_| close_open_form_dialog(),
                }

                // Dialog content
                div {
                    class: if delete_open { "dialog-panel dialog-panel-narrow" } else { "dialog-panel" },
                    onclick: move |e| e.stop_propagation(),

                    if create_open {
                        CreateWidgetDialog {}
                    }
                    if update_open {
                        UpdateWidgetDialog {}
                    }
                    if delete_open {
                        ConfirmDeleteDialog {}
                    }
                }
            }
        }

        if let Some(alert) = alert {
            div {
                class: "dialog-overlay dialog-overlay-top",

                div {
                    class: "dialog-backdrop",
                    onclick: move |_| {
                        APP_STATE.write().dismiss_alert();
                    },
                }

                div {
                    class: "dialog-panel dialog-panel-narrow",
                    onclick: move |e| e.stop_propagation(),
                    AlertDialog { alert: alert.clone() }
                }
            }
        }
    }
}

/// Close whichever form dialog is open (backdrop click).
fn close_open_form_dialog() {
    let mut state = APP_STATE.write();
    if state.delete_dialog.is_open() {
        state.delete_dialog.close();
    } else if state.update_dialog.is_open() {
        state.update_dialog.close();
    } else if state.create_dialog.is_open() {
        state.create_dialog.close();
    }
}
