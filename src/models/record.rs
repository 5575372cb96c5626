//! Record model holding one contact's name, phones, and birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Custom deserializer that drops repeated phone numbers, keeping first-seen order.
fn deserialize_unique_phones<'de, D>(deserializer: D) -> Result<Vec<Phone>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Phone> = Vec::deserialize(deserializer)?;
    let mut phones: Vec<Phone> = Vec::with_capacity(entries.len());
    for phone in entries {
        if !phones.contains(&phone) {
            phones.push(phone);
        }
    }
    Ok(phones)
}

/// A contact in the address book.
///
/// The name is fixed at construction. Phones are unique and keep insertion
/// order; a record holds at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name, also the address book key
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default, deserialize_with = "deserialize_unique_phones")]
    phones: Vec<Phone>,

    /// Optional date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create an empty record from a raw name, validating it.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// Accepts a `Phone` or anything that validates into one (`&str`, `String`).
    ///
    /// # Errors
    ///
    /// - `AddressBookError::Validation` if the input is not a valid phone
    /// - `AddressBookError::DuplicatePhone` if the number is already stored
    pub fn add_phone<P>(&mut self, phone: P) -> AddressBookResult<()>
    where
        P: TryInto<Phone>,
        AddressBookError: From<P::Error>,
    {
        let phone = phone.try_into()?;
        if self.phones.contains(&phone) {
            return Err(AddressBookError::DuplicatePhone);
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number, returning the removed value.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if the number is not stored.
    pub fn remove_phone<P>(&mut self, phone: P) -> AddressBookResult<Phone>
    where
        P: TryInto<Phone>,
        AddressBookError: From<P::Error>,
    {
        let phone = phone.try_into()?;
        let index = self
            .position(&phone)
            .ok_or(AddressBookError::PhoneNotFound)?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// Editing a number onto itself does nothing. If `new` is already stored
    /// elsewhere, `old` is dropped instead so the list never holds a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if `old` is not stored.
    pub fn edit_phone<O, N>(&mut self, old: O, new: N) -> AddressBookResult<()>
    where
        O: TryInto<Phone>,
        N: TryInto<Phone>,
        AddressBookError: From<O::Error> + From<N::Error>,
    {
        let old = old.try_into()?;
        let new = new.try_into()?;

        let index = self
            .position(&old)
            .ok_or(AddressBookError::PhoneNotFound)?;

        if old == new {
            return Ok(());
        }

        if self.phones.contains(&new) {
            self.phones.remove(index);
        } else {
            self.phones[index] = new;
        }
        Ok(())
    }

    /// Look up a stored phone number. Never fails; unknown or malformed
    /// input is simply absent.
    pub fn find_phone(&self, phone: impl AsRef<str>) -> Option<&Phone> {
        let phone = phone.as_ref().trim();
        self.phones.iter().find(|p| **p == phone)
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday<B>(&mut self, birthday: B) -> AddressBookResult<()>
    where
        B: TryInto<Birthday>,
        AddressBookError: From<B::Error>,
    {
        self.birthday = Some(birthday.try_into()?);
        Ok(())
    }

    fn position(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "No birthday".to_string());

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
