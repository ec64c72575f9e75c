//! # Dialog Components
//!
//! Modal dialogs for the widget collection:
//! - **CreateWidgetDialog**: create a new widget with inline validation
//! - **UpdateWidgetDialog**: edit a widget's description and price (the
//!   name is immutable)
//! - **ConfirmDeleteDialog**: confirm a destructive delete
//! - **AlertDialog**: blocking conflict / remote-error notification
//!
//! The dialogs own no state: drafts and field errors live in the dialog
//! state machines inside [`crate::state::AppState`], and the components
//! read snapshots and dispatch mutations.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod alert;
pub mod confirm_delete;
pub mod create_widget;
pub mod update_widget;

// ============================================================================
// Re-exports
// ============================================================================

pub use alert::AlertDialog;
pub use confirm_delete::ConfirmDeleteDialog;
pub use create_widget::CreateWidgetDialog;
pub use update_widget::UpdateWidgetDialog;

use widget_core::{FieldErrors, Widget, WidgetDraft};

// ============================================================================
// Shared submit gate
// ============================================================================

/// Validate a draft for submission.
///
/// Runs every field validator, additionally requires non-blank name and
/// description and a price that parses to a positive number, and builds the
/// trimmed widget on success. Validation failures never reach the network:
/// the caller stores the returned [`FieldErrors`] in the open dialog and
/// aborts.
pub(crate) fn validated_widget(draft: &WidgetDraft) -> Result<Widget, FieldErrors> {
    let mut errors = FieldErrors::for_draft(draft);

    // Whitespace-only text passes the character-class pattern; require real
    // content before submission.
    if errors.name.is_none() && draft.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if errors.description.is_none() && draft.description.trim().is_empty() {
        errors.description = Some("Description is required".to_string());
    }
    if errors.price.is_none() && !draft.parsed_price().is_some_and(|p| p > 0.0) {
        errors.price = Some("Price must be between 1 and 20,000".to_string());
    }

    if errors.has_errors() {
        return Err(errors);
    }

    match draft.to_widget() {
        Some(widget) => Ok(widget),
        None => {
            errors.price = Some("Price must be between 1 and 20,000".to_string());
            Err(errors)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> WidgetDraft {
        WidgetDraft {
            name: "Solar Lamp".to_string(),
            description: "Bright outdoor light".to_string(),
            price: "29.99".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_builds_trimmed_widget() {
        let mut draft = valid_draft();
        draft.name = " Solar Lamp ".to_string();
        let widget = validated_widget(&draft).expect("draft should validate");
        assert_eq!(widget.name, "Solar Lamp");
        assert_eq!(widget.price, 29.99);
    }

    #[test]
    fn test_invalid_fields_block_submission() {
        let mut draft = valid_draft();
        draft.price = "19.999".to_string();
        let errors = validated_widget(&draft).unwrap_err();
        assert_eq!(
            errors.price,
            Some("Price must have up to 2 decimal places".to_string())
        );
        assert_eq!(errors.name, None);
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = validated_widget(&draft).unwrap_err();
        assert_eq!(errors.name, Some("Name is required".to_string()));
    }

    #[test]
    fn test_price_below_minimum_is_rejected() {
        let mut draft = valid_draft();
        draft.price = "0".to_string();
        let errors = validated_widget(&draft).unwrap_err();
        assert_eq!(
            errors.price,
            Some("Price must be between 1 and 20,000".to_string())
        );
    }
}
