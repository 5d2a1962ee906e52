//! Structural validation of the raw meeting-notes input.

use serde_json::Value;

use crate::error::{ExtractionError, Result};

/// Minimum number of characters the notes must contain after trimming.
pub const MIN_NOTES_CHARS: usize = 10;

/// Maximum number of characters the notes may contain, untrimmed.
pub const MAX_NOTES_CHARS: usize = 50_000;

/// Meeting notes that passed validation.
///
/// The wrapped text is the original, untrimmed input; trimming is only used
/// to measure the minimum-length rule, never applied to the forwarded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesInput(String);

impl NotesInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len_chars(&self) -> usize {
        self.0.chars().count()
    }
}

/// Validates the raw `notes` value from the request body.
///
/// Rules run in order and the first failure wins:
/// 1. the value must be present and a JSON string
/// 2. trimmed length must be at least [`MIN_NOTES_CHARS`]
/// 3. untrimmed length must not exceed [`MAX_NOTES_CHARS`]
pub fn validate(raw: Option<&Value>) -> Result<NotesInput> {
    let Some(Value::String(notes)) = raw else {
        return Err(ExtractionError::InvalidType);
    };

    let trimmed = notes.trim().chars().count();
    if trimmed < MIN_NOTES_CHARS {
        return Err(ExtractionError::TooShort {
            length: trimmed,
            min: MIN_NOTES_CHARS,
        });
    }

    let length = notes.chars().count();
    if length > MAX_NOTES_CHARS {
        return Err(ExtractionError::TooLong {
            length,
            max: MAX_NOTES_CHARS,
        });
    }

    Ok(NotesInput(notes.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_absent_value() {
        assert!(matches!(validate(None), Err(ExtractionError::InvalidType)));
    }

    #[test]
    fn test_rejects_non_string_values() {
        for value in [json!(42), json!(null), json!({}), json!(["notes"]), json!(true)] {
            assert!(
                matches!(validate(Some(&value)), Err(ExtractionError::InvalidType)),
                "expected InvalidType for {value}"
            );
        }
    }

    #[test]
    fn test_rejects_short_notes() {
        let value = json!("too short");
        let result = validate(Some(&value));
        assert!(matches!(
            result,
            Err(ExtractionError::TooShort { length: 9, min: 10 })
        ));
    }

    #[test]
    fn test_trimmed_length_exactly_minimum_passes() {
        let value = json!("   abcdefghij   ");
        let notes = validate(Some(&value)).unwrap();
        // The forwarded value keeps its surrounding whitespace.
        assert_eq!(notes.as_str(), "   abcdefghij   ");
    }

    #[test]
    fn test_whitespace_only_notes_rejected() {
        let value = json!("                    ");
        assert!(matches!(
            validate(Some(&value)),
            Err(ExtractionError::TooShort { length: 0, .. })
        ));
    }

    #[test]
    fn test_length_exactly_maximum_passes() {
        let value = json!("a".repeat(MAX_NOTES_CHARS));
        let notes = validate(Some(&value)).unwrap();
        assert_eq!(notes.len_chars(), MAX_NOTES_CHARS);
    }

    #[test]
    fn test_rejects_notes_over_maximum() {
        let value = json!("a".repeat(MAX_NOTES_CHARS + 1));
        let result = validate(Some(&value));
        assert!(matches!(
            result,
            Err(ExtractionError::TooLong { length, max: MAX_NOTES_CHARS }) if length == MAX_NOTES_CHARS + 1
        ));
    }

    #[test]
    fn test_trim_rule_checked_before_length_cap() {
        // A whitespace-padded string over the cap reports TooShort, not
        // TooLong: rules run in order.
        let value = json!(format!("ab{}", " ".repeat(MAX_NOTES_CHARS)));
        assert!(matches!(
            validate(Some(&value)),
            Err(ExtractionError::TooShort { length: 2, .. })
        ));
    }
}
