//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits. Surrounding whitespace is
/// trimmed before validation and is not kept.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new(" 0501234567 ").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert_eq!(phone, "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the trimmed input is
    /// exactly ten decimal digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref();
        let trimmed = phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn is_valid(phone: &str) -> bool {
        TEN_DIGITS.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Phone::new(value)
    }
}

impl TryFrom<&String> for Phone {
    type Error = ValidationError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Phone::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(value)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Phone {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Phone {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Phone> for &str {
    fn eq(&self, other: &Phone) -> bool {
        *self == other.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

struct PhoneVisitor;

impl PhoneVisitor {
    fn mismatch<E: de::Error>(found: String) -> E {
        E::custom(ValidationError::TypeMismatch {
            field: "Phone number",
            found,
        })
    }
}

impl<'de> Visitor<'de> for PhoneVisitor {
    type Value = Phone;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string of exactly 10 digits")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Phone, E> {
        Phone::new(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Phone, E> {
        Err(Self::mismatch(format!("integer `{}`", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Phone, E> {
        Err(Self::mismatch(format!("integer `{}`", value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Phone, E> {
        Err(Self::mismatch(format!("floating point `{}`", value)))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Phone, E> {
        Err(Self::mismatch(format!("boolean `{}`", value)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Phone, E> {
        Err(Self::mismatch("null".to_string()))
    }
}

// Serde support - deserialize from string with validation; numbers and other
// scalars are reported as a type mismatch rather than a malformed value
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PhoneVisitor)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
