//! Contact fields.
//!
//! Every attribute of a contact is a string-backed [`Field`]. `Phone` and
//! `Birthday` add a format rule through [`Validated`]; their `try_new`
//! constructors refuse values that fail it.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, Validated};
pub use name::Name;
pub use phone::Phone;
