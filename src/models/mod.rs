//! Data models for the address book.
//!
//! This module contains the contact record aggregate and the address book
//! that owns records and answers birthday queries.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::Record;
