//! # Alert Dialog
//!
//! Blocking notification dialog for the two non-inline error kinds: the
//! duplicate-name conflict and remote API failures. Dismissing it is the
//! only action; the underlying state is never touched.

use dioxus::prelude::*;

use crate::state::{APP_STATE, Alert};

// ============================================================================
// Main Component
// ============================================================================

/// Blocking alert dialog
#[component]
pub fn AlertDialog(alert: Alert) -> Element {
    let title = alert.title();

    rsx! {
        div {
            class: "dialog-body",

            div {
                class: "dialog-header-row",
                span { class: "dialog-icon dialog-icon-error", "✕" }
                h2 { class: "dialog-title dialog-title-error", "{title}" }
            }

            p {
                class: "dialog-message",
                "{alert.message}"
            }

            div {
                class: "dialog-actions",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| {
                        APP_STATE.write().dismiss_alert();
                    },
                    "OK"
                }
            }
        }
    }
}
