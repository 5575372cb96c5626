//! Command handlers for the contact assistant.
//!
//! Each handler maps one command onto the address book and renders the
//! reply shown to the user.

use crate::error::{AddressBookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record, UPCOMING_WINDOW_DAYS};
use crate::session::Command;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Executes parsed commands against an address book.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    upcoming_window_days: i64,
}

impl CommandHandler {
    /// Create a handler whose `birthdays` command looks `upcoming_window_days` ahead.
    pub fn new(upcoming_window_days: i64) -> Self {
        Self {
            upcoming_window_days,
        }
    }

    /// Run `command` and return the reply text.
    ///
    /// `today` anchors the birthday query. `Exit` is answered with the farewell
    /// message; ending the session is up to the caller.
    pub fn handle(
        &self,
        book: &mut AddressBook,
        command: Command,
        today: NaiveDate,
    ) -> CommandResult<String> {
        debug!(command = ?command, "Handling command");

        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => Self::add_contact(book, &name, &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => Self::change_contact(book, &name, &old_phone, &new_phone),
            Command::Phone { name } => Self::show_phone(book, &name),
            Command::All => Ok(Self::show_all(book)),
            Command::AddBirthday { name, birthday } => Self::add_birthday(book, &name, &birthday),
            Command::ShowBirthday { name } => Self::show_birthday(book, &name),
            Command::Birthdays => Ok(self.birthdays(book, today)),
            Command::Delete { name } => Self::delete_contact(book, &name),
            Command::RemovePhone { name, phone } => Self::remove_phone(book, &name, &phone),
            Command::Exit => Ok("Good bye!".to_string()),
            Command::Unknown(_) => Ok("Invalid command".to_string()),
        }
    }

    fn contact<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
        book.find_mut(name).ok_or(CommandError::ContactNotFound)
    }

    fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
        if let Some(record) = book.find_mut(name) {
            record.add_phone(phone)?;
            info!(contact = %record.name(), "Phone added");
            return Ok("Phone added.".to_string());
        }

        let mut record = Record::named(name)?;
        record.add_phone(phone)?;
        info!(contact = %record.name(), "Contact added");
        book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(
        book: &mut AddressBook,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> CommandResult<String> {
        let record = Self::contact(book, name)?;
        record.edit_phone(old_phone, new_phone)?;
        info!(contact = %record.name(), "Phone changed");
        Ok("Contact updated.".to_string())
    }

    fn show_phone(book: &mut AddressBook, name: &str) -> CommandResult<String> {
        let record = Self::contact(book, name)?;
        if record.phones().is_empty() {
            return Ok("Contact has no phones.".to_string());
        }

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        Ok(format!("{}: {}", record.name(), phones.join(", ")))
    }

    fn show_all(book: &AddressBook) -> String {
        if book.is_empty() {
            return "No added contacts".to_string();
        }

        book.sorted_records()
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
        let record = Self::contact(book, name)?;
        record.add_birthday(birthday)?;
        info!(contact = %record.name(), "Birthday added");
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(book: &mut AddressBook, name: &str) -> CommandResult<String> {
        let record = Self::contact(book, name)?;
        Ok(match record.birthday() {
            Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
            None => format!("Birthday for {} is not set.", record.name()),
        })
    }

    fn birthdays(&self, book: &AddressBook, today: NaiveDate) -> String {
        let upcoming = book.upcoming_birthdays_within(today, self.upcoming_window_days);
        if upcoming.is_empty() {
            return if self.upcoming_window_days == UPCOMING_WINDOW_DAYS {
                "No birthdays in the next week.".to_string()
            } else {
                format!("No birthdays in the next {} days.", self.upcoming_window_days)
            };
        }

        let mut lines = vec!["Upcoming birthdays:".to_string()];
        lines.extend(upcoming.iter().map(|u| u.to_string()));
        lines.join("\n")
    }

    fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<String> {
        let removed = book.delete(name).map_err(|e| match e {
            AddressBookError::NotFound => CommandError::ContactNotFound,
            other => other.into(),
        })?;
        info!(contact = %removed.name(), "Contact deleted");
        Ok("Contact deleted.".to_string())
    }

    fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
        let record = Self::contact(book, name)?;
        record.remove_phone(phone)?;
        info!(contact = %record.name(), "Phone removed");
        Ok("Phone removed.".to_string())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new(UPCOMING_WINDOW_DAYS)
    }
}
