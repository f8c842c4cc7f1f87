//! The capability shared by every contact attribute.

/// A named, string-backed attribute of a contact.
///
/// Implementors also implement `Display`, which renders the raw value.
pub trait Field: std::fmt::Display {
    /// The raw value as it was given.
    fn value(&self) -> &str;
}

/// A field that carries a format rule checked before it is stored.
pub trait Validated: Field {
    /// Pure predicate over the raw value.
    fn validate_format(&self) -> bool;
}

/// Implements `Field`, `Display` and string-backed serde support for a
/// newtype over `String`. Deserialization goes through `$validate` so that
/// invalid values never come in from the outside.
macro_rules! string_field {
    ($ty:ident, $validate:expr) => {
        impl $crate::domain::Field for $ty {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        // Serde support - serialize as string
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                ($validate)(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_field;
