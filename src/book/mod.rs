//! The address book: the keyed collection of all contact records.

pub mod address_book;

pub use address_book::AddressBook;
