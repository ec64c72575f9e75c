//! Field validation for widget drafts
//!
//! Pure, deterministic validators mapping a field's raw string value to an
//! optional error message (`None` = valid). The character-class check runs
//! before the length check for text fields, and the range check runs before
//! the decimal-places check for the price.
//!
//! [`FieldErrors`] collects the results as a typed record with one slot per
//! field, so a misspelled field name is a compile error rather than a
//! silently missing entry.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, CoreResult};
use crate::widget::WidgetDraft;

// ============================================================================
// Patterns and bounds
// ============================================================================

/// Letters and whitespace only, at least one character.
static TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("text pattern is valid"));

/// Digits with an optional fraction of at most two digits.
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("price pattern is valid"));

/// Name length bounds, inclusive.
pub const NAME_LENGTH: (usize, usize) = (3, 100);

/// Description length bounds, inclusive.
pub const DESCRIPTION_LENGTH: (usize, usize) = (5, 1000);

/// Price bounds, inclusive.
pub const PRICE_RANGE: (f64, f64) = (1.0, 20_000.0);

// ============================================================================
// Field
// ============================================================================

/// The validatable fields of a widget draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Price,
}

impl Field {
    /// Display label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Price => "Price",
        }
    }
}

// ============================================================================
// Validators
// ============================================================================

/// Validate a single field's raw value.
///
/// Returns `None` when the value is valid, otherwise the message to show
/// inline next to the field.
pub fn validate(field: Field, raw: &str) -> Option<String> {
    match field {
        Field::Name => validate_name(raw),
        Field::Description => validate_description(raw),
        Field::Price => validate_price(raw),
    }
}

/// Validate a widget name: letters/spaces only, then 3-100 characters.
pub fn validate_name(raw: &str) -> Option<String> {
    if !TEXT_PATTERN.is_match(raw) {
        return Some("Only letters and spaces are allowed".to_string());
    }
    let (min, max) = NAME_LENGTH;
    if raw.chars().count() < min || raw.chars().count() > max {
        return Some("Name must be between 3 and 100 characters".to_string());
    }
    None
}

/// Validate a description: letters/spaces only, then 5-1000 characters.
pub fn validate_description(raw: &str) -> Option<String> {
    if !TEXT_PATTERN.is_match(raw) {
        return Some("Only letters and spaces are allowed".to_string());
    }
    let (min, max) = DESCRIPTION_LENGTH;
    if raw.chars().count() < min || raw.chars().count() > max {
        return Some("Description must be between 5 and 1000 characters".to_string());
    }
    None
}

/// Validate a price: parse, range-check, then limit to 2 decimal places.
pub fn validate_price(raw: &str) -> Option<String> {
    let (min, max) = PRICE_RANGE;
    let price = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
    if price.is_nan() || price < min || price > max {
        return Some("Price must be between 1 and 20,000".to_string());
    }
    if !PRICE_PATTERN.is_match(raw.trim()) {
        return Some("Price must have up to 2 decimal places".to_string());
    }
    None
}

// ============================================================================
// FieldErrors
// ============================================================================

/// Per-field validation errors with one typed slot per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

impl FieldErrors {
    /// Run every validator against a draft.
    pub fn for_draft(draft: &WidgetDraft) -> Self {
        Self {
            name: validate_name(&draft.name),
            description: validate_description(&draft.description),
            price: validate_price(&draft.price),
        }
    }

    /// Whether any field carries an error.
    pub fn has_errors(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.price.is_some()
    }

    /// Set the slot for one field.
    pub fn set(&mut self, field: Field, message: Option<String>) {
        match field {
            Field::Name => self.name = message,
            Field::Description => self.description = message,
            Field::Price => self.price = message,
        }
    }

    /// Read the slot for one field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::Price => self.price.as_deref(),
        }
    }

    /// Convert to a result, joining the messages on failure.
    pub fn to_result(&self) -> CoreResult<()> {
        if !self.has_errors() {
            return Ok(());
        }
        let message = [&self.name, &self.description, &self.price]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        Err(CoreError::validation(message))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── name ────────────────────────────────────────────────────────────

    #[test]
    fn test_name_accepts_letters_and_spaces() {
        assert_eq!(validate_name("Solar Lamp"), None);
        assert_eq!(validate_name("abc"), None);
        assert_eq!(validate_name(&"a".repeat(100)), None);
    }

    #[test]
    fn test_name_rejects_other_characters_before_length() {
        // The character-class message wins even when the length is also bad.
        assert_eq!(
            validate_name("x1"),
            Some("Only letters and spaces are allowed".to_string())
        );
        assert_eq!(
            validate_name("Lamp-3000"),
            Some("Only letters and spaces are allowed".to_string())
        );
        assert_eq!(
            validate_name(""),
            Some("Only letters and spaces are allowed".to_string())
        );
    }

    #[test]
    fn test_name_rejects_out_of_range_lengths() {
        assert_eq!(
            validate_name("ab"),
            Some("Name must be between 3 and 100 characters".to_string())
        );
        assert_eq!(
            validate_name(&"a".repeat(101)),
            Some("Name must be between 3 and 100 characters".to_string())
        );
    }

    // ── description ─────────────────────────────────────────────────────

    #[test]
    fn test_description_bounds() {
        assert_eq!(validate_description("Bright outdoor light"), None);
        assert_eq!(validate_description("abcde"), None);
        assert_eq!(
            validate_description("abcd"),
            Some("Description must be between 5 and 1000 characters".to_string())
        );
        assert_eq!(validate_description(&"a".repeat(1000)), None);
        assert_eq!(
            validate_description(&"a".repeat(1001)),
            Some("Description must be between 5 and 1000 characters".to_string())
        );
    }

    #[test]
    fn test_description_rejects_non_letters() {
        assert_eq!(
            validate_description("99 bottles"),
            Some("Only letters and spaces are allowed".to_string())
        );
    }

    // ── price ───────────────────────────────────────────────────────────

    #[test]
    fn test_price_accepts_valid_values() {
        assert_eq!(validate_price("19.99"), None);
        assert_eq!(validate_price("1"), None);
        assert_eq!(validate_price("20000"), None);
        assert_eq!(validate_price("5.5"), None);
    }

    #[test]
    fn test_price_rejects_out_of_range() {
        assert_eq!(
            validate_price("0"),
            Some("Price must be between 1 and 20,000".to_string())
        );
        assert_eq!(
            validate_price("0.99"),
            Some("Price must be between 1 and 20,000".to_string())
        );
        assert_eq!(
            validate_price("20000.01"),
            Some("Price must be between 1 and 20,000".to_string())
        );
        assert_eq!(
            validate_price("not a number"),
            Some("Price must be between 1 and 20,000".to_string())
        );
    }

    #[test]
    fn test_price_rejects_more_than_two_decimals() {
        assert_eq!(
            validate_price("19.999"),
            Some("Price must have up to 2 decimal places".to_string())
        );
        // Range passes, so the decimal-places message is the one surfaced.
        assert_eq!(
            validate_price("1.234"),
            Some("Price must have up to 2 decimal places".to_string())
        );
    }

    #[test]
    fn test_validate_dispatches_by_field() {
        assert_eq!(validate(Field::Name, "ok name"), None);
        assert_eq!(
            validate(Field::Price, "19.999"),
            Some("Price must have up to 2 decimal places".to_string())
        );
    }

    // ── FieldErrors ─────────────────────────────────────────────────────

    #[test]
    fn test_field_errors_for_valid_draft() {
        let draft = WidgetDraft {
            name: "Solar Lamp".to_string(),
            description: "Bright outdoor light".to_string(),
            price: "29.99".to_string(),
        };
        let errors = FieldErrors::for_draft(&draft);
        assert!(!errors.has_errors());
        assert!(errors.to_result().is_ok());
    }

    #[test]
    fn test_field_errors_for_invalid_draft() {
        let draft = WidgetDraft {
            name: "x1".to_string(),
            description: "ok description".to_string(),
            price: "0".to_string(),
        };
        let errors = FieldErrors::for_draft(&draft);
        assert!(errors.has_errors());
        assert_eq!(
            errors.name,
            Some("Only letters and spaces are allowed".to_string())
        );
        assert_eq!(errors.description, None);
        assert_eq!(
            errors.price,
            Some("Price must be between 1 and 20,000".to_string())
        );
        assert!(errors.to_result().is_err());
    }

    #[test]
    fn test_field_errors_slots() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Price, Some("bad".to_string()));
        assert_eq!(errors.get(Field::Price), Some("bad"));
        assert_eq!(errors.get(Field::Name), None);
        errors.set(Field::Price, None);
        assert!(!errors.has_errors());
    }
}
