//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format accepted and produced for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's %Y also takes short and signed years
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from and rendered as `DD.MM.YYYY`. Only real calendar dates are
/// accepted, so `30.02.2020` and `29.02.2021` are rejected.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2020").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for any other shape or for a
    /// date that does not exist.
    pub fn new(birthday: impl AsRef<str>) -> Result<Self, ValidationError> {
        let birthday = birthday.as_ref();
        if !BIRTHDAY_SHAPE.is_match(birthday) {
            return Err(ValidationError::InvalidBirthday(birthday.to_string()));
        }
        NaiveDate::parse_from_str(birthday, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(birthday.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day placed in `year`.
    ///
    /// February 29 falls back to February 28 when `year` is not a leap year.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year < today {
            self.anniversary_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<&str> for Birthday {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Birthday::new(value)
    }
}

impl TryFrom<&String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Birthday::new(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::new(value)
    }
}

// Serde support - serialize in display format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
