//! Contact Assistant - a command-line address book with birthday reminders.
//!
//! This library keeps contact records (name, phone numbers, birthday) in an
//! in-memory address book, persists it as JSON between sessions, and answers
//! "whose birthday is coming up this week" with weekend dates moved to Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` aggregate and the `AddressBook` with its birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **session**: Command parsing, handlers, and the interactive loop

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{AddressBookError, CommandError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use session::{run_assistant, run_session, Command, CommandHandler, SessionEnd};
