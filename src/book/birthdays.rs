//! Upcoming-birthday windows.
//!
//! A window is the half-open range `[today, today + days)`. Which date of a
//! birthday gets tested against it is decided by a [`BirthdayWindowPolicy`].

use crate::domain::Birthday;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Length of the "this week" window.
pub const WEEK_DAYS: u32 = 7;

/// How a stored birthday is placed on the calendar before the window check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirthdayWindowPolicy {
    /// Compare the stored date as written, birth year included.
    ///
    /// A birthday in a past year never lands in a window anchored today.
    #[default]
    Literal,

    /// Compare the next anniversary on or after the window start.
    Anniversary,
}

impl BirthdayWindowPolicy {
    /// The date of `birthday` that is checked against a window starting at `start`.
    pub fn candidate_date(self, birthday: &Birthday, start: NaiveDate) -> NaiveDate {
        match self {
            Self::Literal => birthday.date(),
            Self::Anniversary => birthday.next_occurrence(start),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Anniversary => "anniversary",
        }
    }
}

impl FromStr for BirthdayWindowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "anniversary" => Ok(Self::Anniversary),
            other => Err(format!(
                "Expected 'literal' or 'anniversary', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for BirthdayWindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    start: NaiveDate,
    end: NaiveDate,
    policy: BirthdayWindowPolicy,
}

impl BirthdayWindow {
    /// Window of `days` days beginning at `today`.
    pub fn new(today: NaiveDate, days: u32, policy: BirthdayWindowPolicy) -> Self {
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        Self {
            start: today,
            end,
            policy,
        }
    }

    /// The seven-day window starting at `today`, compared literally.
    pub fn this_week(today: NaiveDate) -> Self {
        Self::new(today, WEEK_DAYS, BirthdayWindowPolicy::Literal)
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Whether `birthday` falls inside the window under the window's policy.
    pub fn contains(&self, birthday: &Birthday) -> bool {
        self.contains_date(self.policy.candidate_date(birthday, self.start))
    }
}
