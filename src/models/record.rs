//! Record model: everything the book knows about one contact.

use crate::domain::{Birthday, Name, Phone, Validated};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// Phones and birthdays only enter through the `add_*` methods, which run
/// the field's format check first. A failed call leaves the record as it was.
///
/// Deserialization validates every phone, so it is stricter than
/// [`Record::edit_phone`]: a record holding an unchecked phone serializes
/// but will not read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
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

    /// Append a phone. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// `BookError::InvalidFormat` if the phone is not ten digits.
    pub fn add_phone(&mut self, phone: Phone) -> BookResult<()> {
        if !phone.validate_format() {
            return Err(BookError::InvalidFormat(format!(
                "Invalid phone number format: {}",
                phone
            )));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// `BookError::InvalidFormat` if the value is not a `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, birthday: Birthday) -> BookResult<()> {
        if !birthday.validate_format() {
            return Err(BookError::InvalidFormat(format!(
                "Invalid birthday format: {}",
                birthday
            )));
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &Phone) -> BookResult<()> {
        let index = self.position(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new` at the same position.
    ///
    /// `new` is stored as given; its format is not checked here. Callers
    /// taking user input should build it with `Phone::try_new`.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> BookResult<()> {
        let index = self.position(old)?;
        self.phones[index] = new;
        Ok(())
    }

    /// Return the stored phone equal to `phone` as text.
    pub fn find_phone(&self, phone: &Phone) -> BookResult<String> {
        let index = self.position(phone)?;
        Ok(self.phones[index].to_string())
    }

    fn position(&self, phone: &Phone) -> BookResult<usize> {
        self.phones.iter().position(|p| p == phone).ok_or_else(|| {
            BookError::NotFound(format!("Phone number {} not found in the record", phone))
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
