//! # Widget Card Component
//!
//! Stateless card presenting a single widget: name, price (two fixed
//! decimals with a `$` prefix), and description, plus edit/delete
//! affordances that hand the widget back to the parent via callbacks.
//!
//! The card owns no state and never talks to the network; all behavior is
//! delegated through the `on_edit` / `on_delete` props.

use dioxus::prelude::*;
use widget_core::Widget;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct WidgetCardProps {
    /// The widget to display
    pub widget: Widget,

    /// Callback when the edit affordance is clicked
    #[props(default)]
    pub on_edit: EventHandler<Widget>,

    /// Callback when the delete affordance is clicked
    #[props(default)]
    pub on_delete: EventHandler<Widget>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Card display for a single widget
#[component]
pub fn WidgetCard(props: WidgetCardProps) -> Element {
    let widget = props.widget.clone();
    let price = widget.display_price();

    let edit_widget = widget.clone();
    let delete_widget = widget.clone();

    rsx! {
        div {
            class: "widget-card",

            div {
                class: "widget-card-body",
                h3 { class: "widget-card-name", "{widget.name}" }
                p { class: "widget-card-price", "{price}" }
                p { class: "widget-card-description", "{widget.description}" }
            }

            div {
                class: "widget-card-actions",

                a {
                    class: "card-link card-link-primary",
                    href: "#",
                    onclick: move |e| {
                        e.prevent_default();
                        props.on_edit.call(edit_widget.clone());
                    },
                    "Edit"
                }

                a {
                    class: "card-link card-link-danger",
                    href: "#",
                    onclick: move |e| {
                        e.prevent_default();
                        props.on_delete.call(delete_widget.clone());
                    },
                    "Delete"
                }
            }
        }
    }
}
