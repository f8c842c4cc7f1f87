//! Contact Book - a personal contact directory.
//!
//! Stores names, phone numbers and birthdays, validates their formats, and
//! answers lookups and the weekly birthday query.
//!
//! # Architecture
//!
//! - **domain**: Contact fields (`Name`, `Phone`, `Birthday`) and their format rules
//! - **models**: `Record` (one contact) and `AddressBook` (all contacts)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive assistant that turns text commands into book operations

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use cli::Assistant;
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, Validated, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::{AddressBook, Record};
