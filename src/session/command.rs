//! Parsing of user input lines into commands.

use crate::error::{CommandError, CommandResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greet the user
    Hello,
    /// Add a phone, creating the contact if needed
    Add { name: String, phone: String },
    /// Replace one of a contact's phones
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// Show a contact's phones
    Phone { name: String },
    /// List every contact
    All,
    /// Set a contact's birthday
    AddBirthday { name: String, birthday: String },
    /// Show a contact's birthday
    ShowBirthday { name: String },
    /// List birthdays in the coming week
    Birthdays,
    /// Delete a contact
    Delete { name: String },
    /// Remove one phone from a contact
    RemovePhone { name: String, phone: String },
    /// Save and leave
    Exit,
    /// Anything not recognized
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// The first whitespace-separated word is the case-insensitive verb, the
    /// rest are arguments. Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::WrongArguments` when a known verb gets the wrong
    /// number of arguments.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let verb = verb.to_lowercase();
        let args: Vec<String> = parts.map(str::to_string).collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("hello", _) => Command::Hello,
            ("all", _) => Command::All,
            ("birthdays", _) => Command::Birthdays,
            ("close" | "exit", _) => Command::Exit,
            ("add", [name, phone, ..]) => Command::Add {
                name: name.clone(),
                phone: phone.clone(),
            },
            ("change", [name, old_phone, new_phone]) => Command::Change {
                name: name.clone(),
                old_phone: old_phone.clone(),
                new_phone: new_phone.clone(),
            },
            ("phone", [name, ..]) => Command::Phone { name: name.clone() },
            ("add-birthday", [name, birthday]) => Command::AddBirthday {
                name: name.clone(),
                birthday: birthday.clone(),
            },
            ("show-birthday", [name, ..]) => Command::ShowBirthday { name: name.clone() },
            ("delete", [name, ..]) => Command::Delete { name: name.clone() },
            ("remove-phone", [name, phone, ..]) => Command::RemovePhone {
                name: name.clone(),
                phone: phone.clone(),
            },
            (
                "add" | "change" | "phone" | "add-birthday" | "show-birthday" | "delete"
                | "remove-phone",
                _,
            ) => return Err(CommandError::WrongArguments),
            (other, _) => Command::Unknown(other.to_string()),
        };

        Ok(Some(command))
    }
}
