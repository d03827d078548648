//! Field validation helpers shared by every record kind.
//!
//! Each helper returns [`CoreError::Validation`] naming the offending field.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Maximum length for short identity fields (names, titles, colors).
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for free-text fields (descriptions, synopses, quotes).
pub const MAX_TEXT_LEN: usize = 5000;

/// Format of episode air dates.
pub const AIR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Require a non-blank value no longer than `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {max})"
        )));
    }
    Ok(())
}

/// Require a strictly positive number.
pub fn validate_positive(field: &str, value: i64) -> Result<(), CoreError> {
    if value < 1 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

/// Require a calendar date in `YYYY-MM-DD` form.
///
/// chrono accepts unpadded months and days, so the parsed date must format
/// back to the exact input.
pub fn validate_air_date(value: &str) -> Result<(), CoreError> {
    match NaiveDate::parse_from_str(value, AIR_DATE_FORMAT) {
        Ok(date) if date.format(AIR_DATE_FORMAT).to_string() == value => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "air_date must be YYYY-MM-DD, got '{value}'"
        ))),
    }
}

/// Require every entry of a string list to be non-blank.
pub fn validate_list(field: &str, values: &[String]) -> Result<(), CoreError> {
    match values.iter().position(|v| v.trim().is_empty()) {
        Some(i) => Err(CoreError::Validation(format!(
            "{field}[{i}] must not be empty"
        ))),
        None => Ok(()),
    }
}

/// Normalize an optional string: blank means "not yet known".
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
