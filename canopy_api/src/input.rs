// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation of the create form: tree name and comma-separated values.

use crate::error::ApiError;

/// Characters refused in tree names.
pub const UNSAFE_NAME_CHARS: &[char] = &[
    '<', '>', '(', ')', '{', '}', '[', ']', '\\', '/', '^', '$', '|', '?', '*', '+',
];

/// Shown when the name is blank.
pub const MSG_NAME_REQUIRED: &str = "Please enter a name for the tree";
/// Shown while typing a name with an unsafe character.
pub const MSG_NAME_UNSAFE: &str = "Name contains potentially unsafe special characters";
/// Shown on submit while the name still has an unsafe character.
pub const MSG_FIX_NAME: &str = "Please fix the name field errors before submitting";
/// Shown when a value does not parse.
pub const MSG_BAD_NUMBER: &str = "Please enter valid numbers separated by commas";
/// Shown when no values were given.
pub const MSG_NO_NUMBERS: &str = "Please enter at least one number";

/// Live feedback for the name field, or `None` if it is acceptable so far.
pub fn name_feedback(name: &str) -> Option<&'static str> {
    name.contains(UNSAFE_NAME_CHARS).then_some(MSG_NAME_UNSAFE)
}

/// Trim and check a tree name.
pub fn validate_name(name: &str) -> Result<&str, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(MSG_NAME_REQUIRED.to_owned()));
    }
    if let Some(msg) = name_feedback(trimmed) {
        return Err(ApiError::Validation(msg.to_owned()));
    }
    Ok(trimmed)
}

/// Parse `"50, 30, 70"` into values.
///
/// Entries are split on commas and trimmed; empty entries are skipped. Every
/// remaining entry must be a whole decimal integer, and there must be at least
/// one.
///
/// Parsing is strict: `"12abc"` and `"1.5"` are rejected rather than read as
/// their leading digits (`12`, `1`), so a stored tree never holds a value the
/// user did not type.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ApiError> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ApiError::Validation(MSG_BAD_NUMBER.to_owned()))?;
    if values.is_empty() {
        return Err(ApiError::Validation(MSG_NO_NUMBERS.to_owned()));
    }
    Ok(values)
}
