//! Field rules for user records.
//!
//! Shared by the API (server-side checks before writing) and the UI (form
//! validation before submitting). Every rule runs against the trimmed value.

use crate::utils::error::FieldErrors;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z\s]+$").expect("Invalid name pattern");
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern");
}

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_ADDRESS_LEN: usize = 5;

/// The three editable fields of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Address,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Address];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Address => "address",
        }
    }
}

/// Returns the first rule `value` breaks for `field`, if any.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    let value = value.trim();

    let error = match field {
        Field::Name => {
            if value.is_empty() {
                "Name is required"
            } else if value.chars().count() < MIN_NAME_LEN {
                "Name must be at least 2 characters long"
            } else if !NAME_PATTERN.is_match(value) {
                "Name can only contain letters and spaces"
            } else {
                return None;
            }
        }
        Field::Email => {
            if value.is_empty() {
                "Email is required"
            } else if !EMAIL_PATTERN.is_match(value) {
                "Please enter a valid email address"
            } else {
                return None;
            }
        }
        Field::Address => {
            if value.is_empty() {
                "Address is required"
            } else if value.chars().count() < MIN_ADDRESS_LEN {
                "Address must be at least 5 characters long"
            } else {
                return None;
            }
        }
    };

    Some(error.to_string())
}

/// Validates every field that is present. Absent fields are skipped.
pub fn validate_fields(name: Option<&str>, email: Option<&str>, address: Option<&str>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for (field, value) in Field::ALL.into_iter().zip([name, email, address]) {
        if let Some(value) = value {
            if let Some(message) = validate_field(field, value) {
                errors.insert(field.as_str(), message);
            }
        }
    }

    errors
}
