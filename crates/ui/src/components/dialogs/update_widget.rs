//! # Update Widget Dialog
//!
//! Dialog for editing an existing widget. The name identifies the widget on
//! the server and cannot be changed; description and price validate as the
//! user types, mirroring the create dialog.

use dioxus::prelude::*;
use widget_core::{Field, validate};

use crate::api;
use crate::components::dialogs::validated_widget;
use crate::components::inputs::{TextArea, TextInput};
use crate::pages::catalog::refresh_filtered;
use crate::state::{APP_STATE, UpdateDialog, show_notice};

// ============================================================================
// Main Component
// ============================================================================

/// Widget update dialog
#[component]
pub fn UpdateWidgetDialog() -> Element {
    let (draft, errors) = match &APP_STATE.read().update_dialog {
        UpdateDialog::Open { draft, errors, .. } => (draft.clone(), errors.clone()),
        UpdateDialog::Closed => return rsx! {},
    };

    let has_errors = errors.has_errors();

    rsx! {
        div {
            class: "dialog-body",

            h2 { class: "dialog-title", "Update Widget" }

            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    submit_update();
                },

                div {
                    class: "dialog-fields",

                    // Name is the widget's identity and stays read-only.
                    TextInput {
                        value: draft.name.clone(),
                        label: "Name",
                        disabled: true,
                    }

                    TextArea {
                        value: draft.description.clone(),
                        label: "Description",
                        required: true,
                        error: errors.description.clone(),
                        on_change: move |value: String| edit_field(Field::Description, value),
                    }

                    TextInput {
                        value: draft.price.clone(),
                        label: "Price",
                        input_type: "number",
                        required: true,
                        error: errors.price.clone(),
                        on_change: move |value: String| edit_field(Field::Price, value),
                    }
                }

                div {
                    class: "dialog-actions",

                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| {
                            APP_STATE.write().update_dialog.close();
                        },
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: has_errors,
                        "Update"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Store a keystroke in the draft and validate just that field inline.
fn edit_field(field: Field, value: String) {
    let mut state = APP_STATE.write();
    if let UpdateDialog::Open { draft, errors, .. } = &mut state.update_dialog {
        let message = validate(field, &value);
        match field {
            Field::Name => draft.name = value,
            Field::Description => draft.description = value,
            Field::Price => draft.price = value,
        }
        errors.set(field, message);
    }
}

/// Validate and submit the draft as a full replacement.
fn submit_update() {
    let (original_name, draft) = match &APP_STATE.read().update_dialog {
        UpdateDialog::Open {
            original_name,
            draft,
            ..
        } => (original_name.clone(), draft.clone()),
        UpdateDialog::Closed => return,
    };

    let widget = match validated_widget(&draft) {
        Ok(widget) => widget,
        Err(errors) => {
            let mut state = APP_STATE.write();
            if let UpdateDialog::Open { errors: slot, .. } = &mut state.update_dialog {
                *slot = errors;
            }
            return;
        }
    };

    spawn(async move {
        match api().update(&original_name, &widget).await {
            Ok(updated) => {
                tracing::info!("Updated widget '{}'", updated.name);
                {
                    let mut state = APP_STATE.write();
                    state.replace_widget(updated);
                    state.update_dialog.close();
                }
                show_notice(format!("Widget '{}' updated successfully!", original_name));
                refresh_filtered();
            }
            Err(e) => {
                tracing::error!("Failed to update widget '{}': {}", original_name, e);
                APP_STATE
                    .write()
                    .show_remote_error(format!("Failed to update widget: {}", e.user_message()));
            }
        }
    });
}
