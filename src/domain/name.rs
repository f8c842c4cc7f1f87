//! Contact name field.

use super::field::string_field;
use std::convert::Infallible;

/// The display name of a contact. Any value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Lowercased form used as the address book key.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field!(Name, |s: String| Ok::<_, Infallible>(Name(s)));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_name_accepts_anything() {
        let name = Name::new("");
        assert_eq!(name.value(), "");

        let name = Name::new("Élodie O'Neil");
        assert_eq!(name.to_string(), "Élodie O'Neil");
    }

    #[test]
    fn test_name_key_is_lowercase() {
        assert_eq!(Name::new("Alice").key(), "alice");
        assert_eq!(Name::new("ALICE").key(), Name::new("alice").key());
    }

    #[test]
    fn test_name_serialization() {
        let json = serde_json::to_string(&Name::new("Bob")).unwrap();
        assert_eq!(json, "\"Bob\"");

        let name: Name = serde_json::from_str("\"Bob\"").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }
}
