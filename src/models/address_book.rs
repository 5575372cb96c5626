//! Address book aggregate and the upcoming-birthday query.

use crate::domain::{Name, BIRTHDAY_FORMAT};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::collections::HashMap;
use std::fmt;

/// Number of days ahead, including today, covered by the birthday query.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate and the working day to do it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name as stored in the book
    pub name: String,

    /// Birthday moved off the weekend onto the following Monday
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// Collection of contact records keyed by normalized name.
///
/// The key is the record's name at the time it was added. Records cannot be
/// renamed, so the key never goes stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record stored under the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name. The name is normalized the same way `Name`
    /// normalizes it, so `"  john "` finds `"John"`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let key = Name::new(name).ok()?;
        self.records.get(key.as_str())
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let key = Name::new(name).ok()?;
        self.records.get_mut(key.as_str())
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::Validation` if `name` is blank
    /// - `AddressBookError::NotFound` if no such contact exists
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let key = Name::new(name)?;
        self.records
            .remove(key.as_str())
            .ok_or(AddressBookError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records ordered by name, for display.
    pub fn sorted_records(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    /// Contacts whose birthday falls within the next seven days of `today`
    /// (today included), ordered by congratulation date and then name.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// [`AddressBook::get_upcoming_birthdays`] relative to the local date.
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays(Local::now().date_naive())
    }

    /// Like [`AddressBook::get_upcoming_birthdays`] with a custom window.
    ///
    /// A birthday is included when its next occurrence is `0..=days` days
    /// from `today`. Occurrences on Saturday or Sunday are congratulated on
    /// the following Monday.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let next = record.birthday()?.next_occurrence(today)?;
                let delta = (next - today).num_days();
                if !(0..=days).contains(&delta) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: shift_off_weekend(next),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

/// Move Saturday and Sunday dates forward to Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty");
        }

        let lines: Vec<String> = self.records().map(|r| r.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
