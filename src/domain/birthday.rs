//! Birthday field.

use super::errors::ValidationError;
use super::field::{string_field, Validated};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// The only accepted date layout.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded days and months, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A contact's birthday stored as its `DD.MM.YYYY` text.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, Validated};
///
/// assert!(Birthday::new("01.01.2000").validate_format());
/// assert!(!Birthday::new("31.02.2020").validate_format());
/// assert!(!Birthday::new("1.1.2000").validate_format());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Wrap a raw value without checking it.
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    /// Create a Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless the value is a
    /// zero-padded `DD.MM.YYYY` date that exists in the Gregorian calendar.
    pub fn try_new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = Self::new(date);
        if !birthday.validate_format() {
            return Err(ValidationError::InvalidBirthday(birthday.0));
        }
        Ok(birthday)
    }

    /// The calendar date, or `None` when the value does not validate.
    ///
    /// Year 0 exists in chrono's proleptic calendar but is not a Gregorian
    /// year, so it is rejected.
    pub fn date(&self) -> Option<NaiveDate> {
        if !BIRTHDAY_SHAPE.is_match(&self.0) {
            return None;
        }
        NaiveDate::parse_from_str(&self.0, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(BIRTHDAY_FORMAT).to_string())
    }
}

impl Validated for Birthday {
    fn validate_format(&self) -> bool {
        self.date().is_some()
    }
}

string_field!(Birthday, Birthday::try_new);
