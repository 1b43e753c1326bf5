//! Command parsing.
//!
//! A command line is split on whitespace. The first word names the command;
//! it is matched case-insensitively with dashes removed, so `Add-Birthday`
//! and `addbirthday` are the same command.

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

pub const ADD_USAGE: &str = "add [name] [phone]";
pub const CHANGE_USAGE: &str = "change [name] [new_phone]";
pub const PHONE_USAGE: &str = "phone [name]";
pub const ADD_BIRTHDAY_USAGE: &str = "addbirthday [name] [DD.MM.YYYY]";
pub const SHOW_BIRTHDAY_USAGE: &str = "showbirthday [name]";
pub const DELETE_USAGE: &str = "delete [name]";

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create (or replace) a contact with one phone number
    Add { name: String, phone: String },
    /// Replace the contact's first phone number
    Change { name: String, new_phone: String },
    /// Show the contact's first phone number
    Phone { name: String },
    /// List every contact
    All,
    /// Set the contact's birthday
    AddBirthday { name: String, birthday: String },
    /// Show the contact's birthday
    ShowBirthday { name: String },
    /// List contacts with a birthday in the upcoming window
    Birthdays,
    /// Remove a contact
    Delete { name: String },
    /// Greet the user
    Hello,
    /// List available commands
    Help,
    /// Stop the session (`close` or `exit`)
    Exit,
}

impl Command {
    /// Canonical keyword: lowercase, dashes stripped.
    fn normalize(word: &str) -> String {
        word.to_lowercase().replace('-', "")
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next().map(Self::normalize).ok_or(CommandError::Empty)?;
        let params: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "add" => match params.as_slice() {
                [name, phone] => Command::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(CommandError::Usage(ADD_USAGE)),
            },
            "change" => match params.as_slice() {
                [name, new_phone] => Command::Change {
                    name: name.to_string(),
                    new_phone: new_phone.to_string(),
                },
                _ => return Err(CommandError::Usage(CHANGE_USAGE)),
            },
            "phone" => match params.as_slice() {
                [name] => Command::Phone {
                    name: name.to_string(),
                },
                _ => return Err(CommandError::Usage(PHONE_USAGE)),
            },
            "addbirthday" => match params.as_slice() {
                [name, birthday] => Command::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                },
                _ => return Err(CommandError::Usage(ADD_BIRTHDAY_USAGE)),
            },
            "showbirthday" => match params.as_slice() {
                [name] => Command::ShowBirthday {
                    name: name.to_string(),
                },
                _ => return Err(CommandError::Usage(SHOW_BIRTHDAY_USAGE)),
            },
            "delete" => match params.as_slice() {
                [name] => Command::Delete {
                    name: name.to_string(),
                },
                _ => return Err(CommandError::Usage(DELETE_USAGE)),
            },
            // Trailing words are ignored for argument-free commands
            "all" => Command::All,
            "birthdays" => Command::Birthdays,
            "hello" => Command::Hello,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}
