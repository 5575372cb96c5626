//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::convert::Infallible;
use thiserror::Error;

/// Errors raised by record and address book mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already stored on the record
    #[error("This phone number already exists.")]
    DuplicatePhone,

    /// The phone number is not stored on the record
    #[error("This phone number does not exist.")]
    PhoneNotFound,

    /// No contact is stored under the requested name
    #[error("This contact does not exist")]
    NotFound,
}

impl From<Infallible> for AddressBookError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Errors that can occur while persisting the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode the stored JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The file was written by an incompatible version
    #[error("Unsupported storage version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced to the user by the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few or too many arguments for the command
    #[error("Give me right arguments please.")]
    WrongArguments,

    /// The named contact is not in the address book
    #[error("Contact not found")]
    ContactNotFound,

    /// A core operation rejected the request
    #[error(transparent)]
    AddressBook(#[from] AddressBookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::AddressBook(err.into())
    }
}

/// Errors that end an interactive session abnormally.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing replies failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The address book could not be saved on the way out
    #[error("Failed to save address book: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AddressBookError::DuplicatePhone.to_string(),
            "This phone number already exists."
        );
        assert_eq!(
            AddressBookError::NotFound.to_string(),
            "This contact does not exist"
        );
        assert_eq!(
            CommandError::WrongArguments.to_string(),
            "Give me right arguments please."
        );
        assert_eq!(CommandError::ContactNotFound.to_string(), "Contact not found");

        let err = ConfigError::InvalidValue {
            var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for UPCOMING_BIRTHDAYS_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_validation_errors_are_transparent() {
        let err: AddressBookError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err: CommandError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits");
    }

    #[test]
    fn test_storage_error_variants() {
        let err = StorageError::UnsupportedVersion(9);
        assert!(err.to_string().contains('9'));
    }
}
