//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use std::fmt;

/// A single contact.
///
/// Owns one name, an ordered list of phone numbers, and an optional
/// birthday. Phones keep append order and may contain duplicates; removal
/// and replacement act on the first exact match. A birthday can be set once
/// and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phone numbers, in append order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are allowed; there is no dedup
    /// invariant.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone matching `number` exactly.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<()> {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(idx) => {
                self.phones.remove(idx);
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(number.to_string())),
        }
    }

    /// Replace the first phone matching `old` exactly with `new`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches `old`.
    pub fn replace_phone(&mut self, old: &str, new: PhoneNumber) -> BookResult<()> {
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(idx) => {
                self.phones[idx] = new;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Whether any phone matches `number` exactly.
    pub fn has_phone(&self, number: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == number)
    }

    /// Set the birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::BirthdayAlreadySet` if the record already has one.
    pub fn set_birthday(&mut self, birthday: Birthday) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet);
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Comma-joined phone list, e.g. `1234567890, 0987654321`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone_list())?;
        if let Some(birthday) = &self.birthday {
            write!(f, " (born {})", birthday)?;
        }
        Ok(())
    }
}
