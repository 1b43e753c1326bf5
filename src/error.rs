//! Error types for the address book bot.
//!
//! This module defines custom error types using `thiserror`. Field validation
//! errors live with the value objects in [`crate::domain::errors`].

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while parsing a command line.
///
/// None of these are fatal; the handler turns them into replies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line held no command at all
    #[error("Empty command")]
    Empty,

    /// The command word is not recognised
    #[error("Invalid command. Type 'help' for a list of commands.")]
    Unknown(String),

    /// The command was recognised but got the wrong number of arguments
    #[error("Invalid command. Usage: {0}")]
    Usage(&'static str),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
