//! Domain validation errors.

use std::fmt;

/// Message reported when a phone number is not exactly ten digits.
pub const PHONE_FORMAT_MESSAGE: &str =
    "Invalid phone number format. Please provide a 10-digit phone number.";

/// Message reported when a birthday is not a real `DD.MM.YYYY` date.
pub const BIRTHDAY_FORMAT_MESSAGE: &str =
    "Invalid birthday format. Please provide a date in the format DD.MM.YYYY.";

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value does not match the field's format.
    InvalidFormat(String),
}

impl ValidationError {
    /// Error for a malformed phone number.
    pub fn invalid_phone() -> Self {
        Self::InvalidFormat(PHONE_FORMAT_MESSAGE.to_string())
    }

    /// Error for a malformed birthday.
    pub fn invalid_birthday() -> Self {
        Self::InvalidFormat(BIRTHDAY_FORMAT_MESSAGE.to_string())
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidFormat(message) => message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}
