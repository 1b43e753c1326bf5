//! Shared fixtures for integration tests.
//!
//! Provides handlers pinned to a known date and helpers for driving them
//! with raw command lines.

use address_book_bot::bot::{CommandHandler, FixedClock};
use address_book_bot::{BirthdayWindowPolicy, Config};
use chrono::NaiveDate;

/// The date every fixture handler believes is today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// A handler with default configuration and a clock fixed on [`today`].
pub fn handler() -> CommandHandler {
    CommandHandler::with_clock(&Config::default(), Box::new(FixedClock(today())))
}

/// A handler using the anniversary birthday policy over `days` days.
#[allow(dead_code)]
pub fn anniversary_handler(days: u32) -> CommandHandler {
    let config = Config {
        birthday_window_days: days,
        birthday_window_policy: BirthdayWindowPolicy::Anniversary,
        ..Default::default()
    };
    CommandHandler::with_clock(&config, Box::new(FixedClock(today())))
}

/// Run each line through the handler and return the output of the last one.
#[allow(dead_code)]
pub fn run(handler: &mut CommandHandler, lines: &[&str]) -> Vec<String> {
    let mut last = Vec::new();
    for line in lines {
        last = handler.handle_line(line).lines().to_vec();
    }
    last
}
