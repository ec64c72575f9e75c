//! Widget entity model
//!
//! The [`Widget`] is the single entity managed by the application: a named
//! catalog item with a description and a price. Widgets are keyed by name;
//! the name is immutable once a widget has been created.
//!
//! [`WidgetDraft`] holds the raw, not-yet-validated form fields used by the
//! create and update dialogs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Widget
// ============================================================================

/// A single catalog item.
///
/// The `name` acts as the primary key for update, delete, and search
/// operations against the remote API. Uniqueness is case-insensitive and
/// enforced client-side at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique name (3-100 characters, letters and whitespace only).
    pub name: String,
    /// Free-text description (5-1000 characters, letters and whitespace only).
    pub description: String,
    /// Price in currency units (> 0 and <= 20000, at most 2 decimal places).
    pub price: f64,
}

impl Widget {
    /// Create a new widget.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Case-insensitive name comparison.
    ///
    /// This is the equality used for the collection's uniqueness invariant.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }

    /// Price formatted for display, e.g. `$29.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

// ============================================================================
// WidgetDraft
// ============================================================================

/// Raw form fields for an in-progress create or update.
///
/// All fields are kept as strings so the dialogs can hold exactly what the
/// user typed; validation and parsing happen on submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetDraft {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl WidgetDraft {
    /// Seed a draft from an existing widget (used by the update dialog).
    pub fn from_widget(widget: &Widget) -> Self {
        Self {
            name: widget.name.clone(),
            description: widget.description.clone(),
            price: widget.price.to_string(),
        }
    }

    /// The price parsed as a number, if it parses at all.
    pub fn parsed_price(&self) -> Option<f64> {
        self.price.trim().parse::<f64>().ok()
    }

    /// Build a widget from the draft, trimming text fields.
    ///
    /// Returns `None` when the price does not parse; validation of the
    /// field contents is the caller's responsibility.
    pub fn to_widget(&self) -> Option<Widget> {
        Some(Widget {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.parsed_price()?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Widget {
        Widget::new("Solar Lamp", "Bright outdoor light", 29.99)
    }

    #[test]
    fn test_display_price_two_decimals() {
        assert_eq!(sample().display_price(), "$29.99");
        assert_eq!(Widget::new("a", "b", 5.0).display_price(), "$5.00");
        assert_eq!(Widget::new("a", "b", 19.9).display_price(), "$19.90");
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let widget = sample();
        assert!(widget.name_matches("solar lamp"));
        assert!(widget.name_matches("SOLAR LAMP"));
        assert!(!widget.name_matches("Lunar Lamp"));
    }

    #[test]
    fn test_draft_from_widget() {
        let draft = WidgetDraft::from_widget(&sample());
        assert_eq!(draft.name, "Solar Lamp");
        assert_eq!(draft.description, "Bright outdoor light");
        assert_eq!(draft.price, "29.99");
    }

    #[test]
    fn test_draft_to_widget_trims_text_fields() {
        let draft = WidgetDraft {
            name: "  Solar Lamp ".to_string(),
            description: " Bright outdoor light  ".to_string(),
            price: "29.99".to_string(),
        };
        let widget = draft.to_widget().expect("price should parse");
        assert_eq!(widget, sample());
    }

    #[test]
    fn test_draft_to_widget_rejects_unparseable_price() {
        let draft = WidgetDraft {
            name: "Solar Lamp".to_string(),
            description: "Bright outdoor light".to_string(),
            price: "abc".to_string(),
        };
        assert_eq!(draft.to_widget(), None);
    }

    #[test]
    fn test_widget_serde_field_names() {
        let document = r#"
            name = "Solar Lamp"
            description = "Bright outdoor light"
            price = 29.99
        "#;
        let parsed: Widget = toml::from_str(document).expect("widget should deserialize");
        assert_eq!(parsed, sample());
    }
}
