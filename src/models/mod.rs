//! Contact book data model.
//!
//! A [`Record`] holds one contact's fields; an [`AddressBook`] keys records
//! by lowercased name and answers lookup and birthday queries.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
