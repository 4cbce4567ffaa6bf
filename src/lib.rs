//! An in-memory contact book driven by a line-oriented command REPL.
//!
//! Stores names, phone numbers, and birthdays; supports add/edit/remove/find
//! operations and reports upcoming birthdays within a configurable window.
//! Nothing is persisted: the book lives for the process lifetime and is
//! discarded on exit.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record aggregate
//! - **book**: the address book, an explicit name-to-record mapping
//! - **repl**: command parsing and the prompt/dispatch/print loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::ContactRecord;
pub use repl::Command;
