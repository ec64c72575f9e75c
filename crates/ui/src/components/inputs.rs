//! # Input Components
//!
//! Reusable form input components for the Widget Manager UI.
//!
//! This module provides styled, accessible input components:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//!
//! Both render an optional label, inline error message, and help text in a
//! consistent layout.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, number, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            // Input
            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            // Help text or error
            if let Some(error) = &props.error {
                p {
                    class: "input-message input-message-error",
                    "{error}"
                }
            } else if let Some(help) = &props.help_text {
                p {
                    class: "input-message input-message-help",
                    "{help}"
                }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_textarea_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            // Textarea
            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            // Help text or error
            if let Some(error) = &props.error {
                p {
                    class: "input-message input-message-error",
                    "{error}"
                }
            } else if let Some(help) = &props.help_text {
                p {
                    class: "input-message input-message-help",
                    "{help}"
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["input-field"];

    if has_error {
        classes.push("input-field-error");
    }
    if disabled {
        classes.push("input-field-disabled");
    }

    classes.join(" ")
}

/// Build textarea class string
fn build_textarea_class(has_error: bool, disabled: bool) -> String {
    let mut class = build_input_class(has_error, disabled);
    class.push_str(" input-field-multiline");
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false);
        assert_eq!(class, "input-field");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false);
        assert!(class.contains("input-field-error"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        let class = build_input_class(false, true);
        assert!(class.contains("input-field-disabled"));
        assert!(!class.contains("input-field-error"));
    }

    #[test]
    fn test_build_textarea_class() {
        let class = build_textarea_class(true, false);
        assert!(class.contains("input-field-multiline"));
        assert!(class.contains("input-field-error"));
    }
}
