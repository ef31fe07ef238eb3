//! Helper functions and utilities
//!
//! Shared field checks for the reference entities (users, facilities,
//! organizations). The event model carries its own, richer rules; these
//! cover plain bounded-text and positive-number fields.

use crate::utils::errors::{CampusEventsError, Result};

/// Check a required text field against inclusive character bounds.
pub fn validate_text_field(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        let reason = if min <= 1 {
            "must not be empty".to_string()
        } else {
            format!("must be at least {min} characters")
        };
        return Err(CampusEventsError::validation(field, reason));
    }
    if len > max {
        return Err(CampusEventsError::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Check an optional text field against inclusive character bounds;
/// an absent value passes.
pub fn validate_optional_text_field(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<()> {
    match value {
        Some(value) => validate_text_field(field, value, min, max),
        None => Ok(()),
    }
}

/// Check a count-like field (capacity and friends) is strictly positive.
pub fn validate_positive(field: &str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(CampusEventsError::validation(
            field,
            "must be greater than 0",
        ));
    }
    Ok(())
}

/// Check pagination arguments against the configured maximum page size.
pub fn validate_page(limit: i64, offset: i64, max_page_size: i64) -> Result<()> {
    if limit < 1 || limit > max_page_size {
        return Err(CampusEventsError::validation(
            "limit",
            format!("must be between 1 and {max_page_size}"),
        ));
    }
    if offset < 0 {
        return Err(CampusEventsError::validation(
            "offset",
            "must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn text_bounds_are_inclusive() {
        assert!(validate_text_field("name", "ab", 2, 4).is_ok());
        assert!(validate_text_field("name", "abcd", 2, 4).is_ok());
        assert!(validate_text_field("name", "a", 2, 4).is_err());
        assert!(validate_text_field("name", "abcde", 2, 4).is_err());
    }

    #[test]
    fn empty_required_field_names_the_field() {
        assert_matches!(
            validate_text_field("location", "", 1, 120),
            Err(CampusEventsError::Validation { field, reason })
                if field == "location" && reason == "must not be empty"
        );
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Four characters, more than four bytes.
        assert!(validate_text_field("name", "café", 1, 4).is_ok());
    }

    #[test]
    fn absent_optional_field_passes() {
        assert!(validate_optional_text_field("phone", None, 1, 40).is_ok());
        assert!(validate_optional_text_field("phone", Some(""), 1, 40).is_err());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(validate_positive("capacity", 1).is_ok());
        assert_matches!(
            validate_positive("capacity", 0),
            Err(CampusEventsError::Validation { field, .. }) if field == "capacity"
        );
        assert!(validate_positive("capacity", -5).is_err());
    }

    #[test]
    fn page_limits_are_capped() {
        assert!(validate_page(1, 0, 200).is_ok());
        assert!(validate_page(200, 40, 200).is_ok());
        assert_matches!(
            validate_page(0, 0, 200),
            Err(CampusEventsError::Validation { field, .. }) if field == "limit"
        );
        assert_matches!(
            validate_page(201, 0, 200),
            Err(CampusEventsError::Validation { field, .. }) if field == "limit"
        );
        assert_matches!(
            validate_page(10, -1, 200),
            Err(CampusEventsError::Validation { field, .. }) if field == "offset"
        );
    }
}
