//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// chrono format matching the `DD.MM.YYYY` layout.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the layout is pinned first
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A birthday written as `DD.MM.YYYY`.
///
/// The stored text always matches the layout and names a real calendar
/// date, so `31.02.2000` is rejected while `29.02.2000` is accepted.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2000");
/// assert!(Birthday::new("31.02.2000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating layout and calendar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the text is not a real
    /// `DD.MM.YYYY` date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !BIRTHDAY_PATTERN.is_match(&value) {
            return Err(ValidationError::invalid_birthday());
        }

        let date = NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::invalid_birthday())?;

        Ok(Self { value, date })
    }

    /// Get the birthday in its canonical `DD.MM.YYYY` form.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The calendar date exactly as stored, year included.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The first anniversary of this birthday falling on or after `from`.
    ///
    /// A 29 February birthday is celebrated on 28 February in common years.
    pub fn next_occurrence(&self, from: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(from.year());
        if this_year >= from {
            return this_year;
        }
        self.anniversary_in(from.year() + 1)
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
