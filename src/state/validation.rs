//! Client-side validation: required fields and phone numbers
//!
//! Two phone checks exist on purpose. Advancing past a step only checks the
//! loose US pattern; submitting counts digits and rewrites the value into
//! `(DDD) DDD-DDDD`.

use super::forms::Step;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Title shared by both phone warnings
pub const INVALID_PHONE_TITLE: &str = "Invalid Phone";

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$")
        .expect("phone pattern is a valid regex")
});

/// Local, recoverable input errors. None of these reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{name} is required")]
    RequiredFieldEmpty { index: usize, name: String },
    #[error("Please enter a valid US phone number (e.g. 555-555-5555).")]
    PhoneFormat { index: usize },
    #[error("Please enter a valid 10-digit phone number.")]
    PhoneDigits,
}

impl ValidationError {
    /// Field index within the step that should receive focus
    pub fn focus_index(&self) -> Option<usize> {
        match self {
            Self::RequiredFieldEmpty { index, .. } | Self::PhoneFormat { index } => Some(*index),
            Self::PhoneDigits => None,
        }
    }

    /// Whether the user is told about this error with a dialog.
    /// Missing required fields only move focus.
    pub fn shows_dialog(&self) -> bool {
        !matches!(self, Self::RequiredFieldEmpty { .. })
    }
}

/// Check every required field of `step`, stopping at the first blank one
pub fn validate_required_fields(step: &Step) -> Result<(), ValidationError> {
    match step.fields.iter().position(|f| f.required && f.is_blank()) {
        Some(index) => Err(ValidationError::RequiredFieldEmpty {
            index,
            name: step.fields[index].name.clone(),
        }),
        None => Ok(()),
    }
}

/// Loose step-advance check of a phone value
pub fn matches_phone_pattern(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Check the step's phone field, if it has one and it is filled in
pub fn validate_phone_format(step: &Step) -> Result<(), ValidationError> {
    let Some(index) = step.phone_field_index() else {
        return Ok(());
    };
    let value = step.fields[index].value().trim();
    if value.is_empty() || matches_phone_pattern(value) {
        Ok(())
    } else {
        Err(ValidationError::PhoneFormat { index })
    }
}

/// Validate a step before leaving it: required fields first, then phone format
pub fn validate_step(step: &Step) -> Result<(), ValidationError> {
    validate_required_fields(step)?;
    validate_phone_format(step)
}

/// Strip everything but digits and format exactly ten of them as `(DDD) DDD-DDDD`
pub fn normalize_phone(value: &str) -> Result<String, ValidationError> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return Err(ValidationError::PhoneDigits);
    }
    Ok(format!(
        "({}) {}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}
