//! Shared field checks for character schemas.

use crate::domain::foundation::{ValidationError, ValidationErrors};

/// Non-empty (after trimming) and at most `max` characters.
pub(crate) fn check_text(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        errors.push(ValidationError::empty_field(field));
        return;
    }
    let length = value.chars().count();
    if length > max {
        errors.push(ValidationError::too_long(field, max, length));
    }
}

/// Integer within `min..=max`.
pub(crate) fn check_range(errors: &mut ValidationErrors, field: &str, value: i32, min: i32, max: i32) {
    if !(min..=max).contains(&value) {
        errors.push(ValidationError::out_of_range(field, min, max, value));
    }
}

/// Runs a nested validation and files its errors under `prefix`.
pub(crate) fn check_nested(
    errors: &mut ValidationErrors,
    prefix: &str,
    result: Result<(), ValidationErrors>,
) {
    if let Err(nested) = result {
        errors.merge_nested(prefix, nested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", "   ", 10);
        assert_eq!(errors.fields(), vec!["name"]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", "Éowyn", 5);
        assert!(errors.is_empty());
    }

    #[test]
    fn range_is_inclusive() {
        let mut errors = ValidationErrors::new();
        check_range(&mut errors, "level", 20, 1, 20);
        check_range(&mut errors, "level", 1, 1, 20);
        assert!(errors.is_empty());

        check_range(&mut errors, "level", 0, 1, 20);
        assert_eq!(errors.len(), 1);
    }
}
