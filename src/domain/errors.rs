//! Domain validation errors.

use std::convert::Infallible;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or only whitespace.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// A value of the wrong type was supplied where text was expected.
    TypeMismatch {
        field: &'static str,
        found: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Phone number must be exactly 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use 'DD.MM.YYYY'."),
            Self::TypeMismatch { field, found } => {
                write!(f, "{} must be a string, got {}", field, found)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// Lets an already-validated value pass through `TryInto` normalization.
impl From<Infallible> for ValidationError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
