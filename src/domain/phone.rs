//! Phone field.

use super::errors::ValidationError;
use super::field::{string_field, Validated};
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in an accepted phone number.
pub const PHONE_DIGITS: usize = 10;

// Unicode decimal digits (category Nd), not just ASCII.
static DECIMAL_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Nd}+$").expect("valid phone regex"));

/// A phone number attached to a contact.
///
/// `Phone::new` stores whatever it is given; `Phone::try_new` is the
/// boundary constructor that only yields numbers passing
/// [`Validated::validate_format`].
///
/// # Example
///
/// ```
/// use contact_book::domain::{Phone, Validated};
///
/// let phone = Phone::try_new("0501234567").unwrap();
/// assert!(phone.validate_format());
/// assert!(Phone::try_new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Wrap a raw value without checking it.
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Create a Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten decimal digits.
    pub fn try_new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = Self::new(phone);
        if !phone.validate_format() {
            return Err(ValidationError::InvalidPhone(phone.0));
        }
        Ok(phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Validated for Phone {
    fn validate_format(&self) -> bool {
        self.0.chars().count() == PHONE_DIGITS && DECIMAL_DIGITS.is_match(&self.0)
    }
}

string_field!(Phone, Phone::try_new);
