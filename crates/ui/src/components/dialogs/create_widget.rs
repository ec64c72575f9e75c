//! # Create Widget Dialog
//!
//! Dialog for creating a new widget.
//!
//! Fields validate as the user types; submission re-validates everything,
//! rejects case-insensitive duplicate names before any network call, and
//! leaves the dialog open (draft intact) on remote failure.

use dioxus::prelude::*;
use widget_core::{Field, validate};

use crate::api;
use crate::components::dialogs::validated_widget;
use crate::components::inputs::{TextArea, TextInput};
use crate::pages::catalog::refresh_filtered;
use crate::state::{APP_STATE, CreateDialog, show_notice};

// ============================================================================
// Main Component
// ============================================================================

/// Widget creation dialog
#[component]
pub fn CreateWidgetDialog() -> Element {
    let (draft, errors) = match &APP_STATE.read().create_dialog {
        CreateDialog::Open { draft, errors } => (draft.clone(), errors.clone()),
        CreateDialog::Closed => return rsx! {},
    };

    let has_errors = errors.has_errors();

    rsx! {
        div {
            class: "dialog-body",

            h2 { class: "dialog-title", "Create a New Widget" }

            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    submit_create();
                },

                div {
                    class: "dialog-fields",

                    TextInput {
                        value: draft.name.clone(),
                        label: "Name",
                        placeholder: "e.g. Solar Lamp",
                        required: true,
                        error: errors.name.clone(),
                        on_change: move |value: String| edit_field(Field::Name, value),
                    }

                    TextArea {
                        value: draft.description.clone(),
                        label: "Description",
                        placeholder: "Describe the widget...",
                        required: true,
                        error: errors.description.clone(),
                        on_change: move |value: String| edit_field(Field::Description, value),
                    }

                    TextInput {
                        value: draft.price.clone(),
                        label: "Price",
                        input_type: "number",
                        placeholder: "e.g. 29.99",
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
                            APP_STATE.write().create_dialog.close();
                        },
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: has_errors,
                        "Create"
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
    if let CreateDialog::Open { draft, errors } = &mut state.create_dialog {
        let message = validate(field, &value);
        match field {
            Field::Name => draft.name = value,
            Field::Description => draft.description = value,
            Field::Price => draft.price = value,
        }
        errors.set(field, message);
    }
}

/// Validate and submit the draft.
fn submit_create() {
    let draft = match &APP_STATE.read().create_dialog {
        CreateDialog::Open { draft, .. } => draft.clone(),
        CreateDialog::Closed => return,
    };

    let widget = match validated_widget(&draft) {
        Ok(widget) => widget,
        Err(errors) => {
            let mut state = APP_STATE.write();
            if let CreateDialog::Open { errors: slot, .. } = &mut state.create_dialog {
                *slot = errors;
            }
            return;
        }
    };

    // The uniqueness invariant is enforced here, before anything is sent.
    if APP_STATE.read().has_widget_named(&widget.name) {
        APP_STATE.write().show_conflict(&widget.name);
        return;
    }

    spawn(async move {
        match api().create(&widget).await {
            Ok(created) => {
                tracing::info!("Created widget '{}'", created.name);
                {
                    let mut state = APP_STATE.write();
                    state.insert_widget(created);
                    state.create_dialog.close();
                }
                show_notice("Widget created successfully!");
                refresh_filtered();
            }
            Err(e) => {
                tracing::error!("Failed to create widget '{}': {}", widget.name, e);
                APP_STATE
                    .write()
                    .show_remote_error(format!("Failed to create widget: {}", e.user_message()));
            }
        }
    });
}
