//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by `Record` and `AddressBook` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone or birthday failed its format check before being stored
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The phone or contact is not present
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationError> for BookError {
    fn from(err: ValidationError) -> Self {
        BookError::InvalidFormat(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by assistant commands.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Failure from the contact book itself
    #[error(transparent)]
    Book(#[from] BookError),

    /// The command needs a name and a value
    #[error("Missing name and value arguments")]
    MissingArguments,

    /// The command needs a name
    #[error("Missing name argument")]
    MissingName,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(err.into())
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
