//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address-book and record operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("no contact named {0:?}")]
    ContactNotFound(String),

    /// No phone on the record matches the given number
    #[error("no phone number {0} on this contact")]
    PhoneNotFound(String),

    /// The record already has a birthday
    #[error("birthday already set for this contact")]
    BirthdayAlreadySet,

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while parsing a command line.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command token is not recognized
    #[error("unknown command {0:?}")]
    Unknown(String),

    /// The command was given the wrong number of arguments
    #[error("wrong number of arguments for {command}")]
    BadArity {
        /// The command token as typed (lower-cased)
        command: String,
    },

    /// The input line contained no tokens
    #[error("empty input line")]
    Empty,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("alice".to_string());
        assert_eq!(err.to_string(), "no contact named \"alice\"");

        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "no phone number 1234567890 on this contact");

        let err = BookError::BirthdayAlreadySet;
        assert_eq!(err.to_string(), "birthday already set for this contact");

        let err = CommandError::Unknown("frobnicate".to_string());
        assert_eq!(err.to_string(), "unknown command \"frobnicate\"");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be at least 1"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = BookError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), ValidationError::EmptyName.to_string());
    }
}
