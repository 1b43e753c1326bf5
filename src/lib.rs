//! Address Book Bot - an in-memory contact book driven by text commands.
//!
//! The bot stores names, phone numbers, and birthdays, validates their
//! formats, and answers lookups, listings, and upcoming-birthday queries.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record built from those values
//! - **book**: The name-keyed address book and birthday windows
//! - **bot**: Command parsing, command handlers, and the session loop
//! - **config**: Configuration from environment variables
//! - **error**: Configuration and command-line error types

pub mod book;
pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, BirthdayWindow, BirthdayWindowPolicy};
pub use bot::{run_session, Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::ContactRecord;
