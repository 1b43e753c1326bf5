//! Command handlers.
//!
//! The handler owns the address book and turns each [`Command`] into core
//! calls plus the text shown to the user.

use super::clock::{Clock, SystemClock};
use super::command::{
    Command, ADD_BIRTHDAY_USAGE, ADD_USAGE, CHANGE_USAGE, DELETE_USAGE, PHONE_USAGE,
    SHOW_BIRTHDAY_USAGE,
};
use crate::book::{AddressBook, BirthdayWindowPolicy, WEEK_DAYS};
use crate::config::Config;
use crate::domain::ValidationError;
use crate::error::CommandError;
use crate::models::ContactRecord;
use tracing::{debug, warn};

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the lines and read the next command
    Continue(Vec<String>),
    /// Print the lines and stop
    Exit(Vec<String>),
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Continue(vec![text.into()])
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Reply::Continue(lines) | Reply::Exit(lines) => lines,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Executes commands against a single owned address book.
pub struct CommandHandler {
    book: AddressBook,
    clock: Box<dyn Clock>,
    window_days: u32,
    window_policy: BirthdayWindowPolicy,
}

impl CommandHandler {
    /// Create a handler with an empty book that reads the system date.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a handler with an empty book and a custom date source.
    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            window_days: config.birthday_window_days,
            window_policy: config.birthday_window_policy,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line.
    ///
    /// Blank lines produce an empty reply; parse failures produce a usage
    /// message and leave the book untouched.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Reply::Continue(Vec::new()),
            Err(e) => {
                debug!(input = %line, error = %e, "Rejected command line");
                Reply::line(e.to_string())
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Reply {
        debug!(?command, "Executing command");
        match command {
            Command::Add { name, phone } => Reply::Continue(self.add_contact(&name, &phone)),
            Command::Change { name, new_phone } => {
                Reply::Continue(self.change_phone(&name, &new_phone))
            }
            Command::Phone { name } => Reply::line(self.show_phone(&name)),
            Command::All => Reply::Continue(self.show_all()),
            Command::AddBirthday { name, birthday } => {
                Reply::Continue(self.add_birthday(&name, &birthday))
            }
            Command::ShowBirthday { name } => Reply::line(self.show_birthday(&name)),
            Command::Birthdays => Reply::Continue(self.show_upcoming_birthdays()),
            Command::Delete { name } => Reply::line(self.delete_contact(&name)),
            Command::Hello => Reply::line("Hello! How can I assist you today?"),
            Command::Help => Reply::Continue(help_lines()),
            Command::Exit => Reply::Exit(vec!["Closing the program.".to_string()]),
        }
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> Vec<String> {
        let mut record = ContactRecord::new(name);
        match record.add_phone(phone) {
            Ok(()) => {
                self.book.add_record(record);
                vec![format!("Contact {} added with phone number {}.", name, phone)]
            }
            Err(e) => failure(e, format!("Failed to add contact {}.", name)),
        }
    }

    fn change_phone(&mut self, name: &str, new_phone: &str) -> Vec<String> {
        let Some(record) = self.book.find_mut(name) else {
            return vec![not_found(name)];
        };
        let failed = format!("Failed to update phone number for contact {}.", name);

        let Some(old) = record.first_phone().map(|p| p.as_str().to_owned()) else {
            return vec![failed];
        };

        match record.edit_phone(&old, new_phone) {
            Ok(true) => vec![format!("Phone number updated for contact {}.", name)],
            Ok(false) => vec![failed],
            Err(e) => {
                warn!(contact = %name, lost = %old, "Phone removed before replacement failed validation");
                failure(e, failed)
            }
        }
    }

    fn show_phone(&self, name: &str) -> String {
        match self.book.find(name) {
            Some(record) => match record.first_phone() {
                Some(phone) => format!("{}'s phone number is {}.", name, phone),
                None => format!("{} doesn't have a phone number set.", name),
            },
            None => not_found(name),
        }
    }

    fn show_all(&self) -> Vec<String> {
        if self.book.is_empty() {
            return vec!["Address book is empty.".to_string()];
        }
        std::iter::once("All contacts in the address book:".to_string())
            .chain(self.book.iter().map(ToString::to_string))
            .collect()
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> Vec<String> {
        let Some(record) = self.book.find_mut(name) else {
            return vec![not_found(name)];
        };
        match record.add_birthday(birthday) {
            Ok(()) => vec![format!("Birthday added for {}.", name)],
            Err(e) => failure(e, format!("Failed to add birthday for {}.", name)),
        }
    }

    fn show_birthday(&self, name: &str) -> String {
        match self.book.find(name) {
            Some(record) => match record.birthday() {
                Some(birthday) => format!("{}'s birthday is on {}.", name, birthday),
                None => format!("{} doesn't have a birthday set.", name),
            },
            None => not_found(name),
        }
    }

    fn show_upcoming_birthdays(&self) -> Vec<String> {
        let today = self.clock.today();
        let upcoming =
            self.book
                .birthdays_in_window(today, self.window_days, self.window_policy);
        debug!(
            %today,
            days = self.window_days,
            policy = %self.window_policy,
            found = upcoming.len(),
            "Scanned birthdays"
        );

        let period = match self.window_days {
            WEEK_DAYS => "this week".to_string(),
            1 => "today".to_string(),
            days => format!("in the next {} days", days),
        };
        if upcoming.is_empty() {
            return vec![format!("No upcoming birthdays {}.", period)];
        }
        std::iter::once(format!("Upcoming birthdays {}:", period))
            .chain(upcoming.into_iter().map(ToString::to_string))
            .collect()
    }

    fn delete_contact(&mut self, name: &str) -> String {
        match self.book.delete(name) {
            Some(_) => format!("Contact {} deleted.", name),
            None => not_found(name),
        }
    }
}

fn not_found(name: &str) -> String {
    format!("Contact {} not found.", name)
}

fn failure(error: ValidationError, reply: String) -> Vec<String> {
    warn!(error = %error, "Validation failed");
    vec![format!("Error: {}", error), reply]
}

fn help_lines() -> Vec<String> {
    let entries = [
        ("hello", "greet the assistant"),
        (ADD_USAGE, "add a contact, replacing any contact with that name"),
        (CHANGE_USAGE, "replace the contact's first phone number"),
        (PHONE_USAGE, "show the contact's phone number"),
        ("all", "list all contacts"),
        (ADD_BIRTHDAY_USAGE, "set the contact's birthday"),
        (SHOW_BIRTHDAY_USAGE, "show the contact's birthday"),
        ("birthdays", "list upcoming birthdays"),
        (DELETE_USAGE, "remove a contact"),
        ("close | exit", "leave the program"),
    ];
    std::iter::once("Available commands:".to_string())
        .chain(
            entries
                .iter()
                .map(|(usage, what)| format!("  {:<34}{}", usage, what)),
        )
        .collect()
}
