//! In-memory address book keyed by contact name.
//!
//! The book is an explicit mapping from the name string to its record. It is
//! created empty at startup, mutated for the process lifetime, and discarded
//! on exit; nothing is persisted.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// The keyed collection of all contact records for the process lifetime.
///
/// Keys are the literal name strings, so iteration (and therefore the `all`
/// rendering) is in sorted name order. Every operation takes parsed command
/// arguments and returns either a display string or a typed [`BookError`]
/// for the dispatch layer to convert.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Register a phone number under `name`, creating the record if needed.
    ///
    /// An existing record only gains a phone; the birthday argument is
    /// ignored in that branch. A new record is created with the phone and,
    /// when given, the birthday. Both values are validated before the map is
    /// touched, so a failed add leaves no partial state.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the phone or birthday is malformed.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> BookResult<String> {
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.records.get_mut(name) {
            record.add_phone(phone);
            debug!("phone appended to existing contact {}", name);
            return Ok(format!("Phone added to contact {}.", name));
        }

        let birthday = birthday.map(Birthday::new).transpose()?;
        let mut record = ContactRecord::new(ContactName::new(name)?);
        record.add_phone(phone);
        if let Some(birthday) = birthday {
            record.set_birthday(birthday)?;
        }
        self.records.insert(name.to_string(), record);
        debug!("contact {} added", name);
        Ok("Contact added.".to_string())
    }

    /// Replace `old` with `new` on the record stored under `name`.
    ///
    /// The first phone matching `old` exactly is replaced; positions of the
    /// other phones are untouched.
    ///
    /// # Errors
    ///
    /// `ContactNotFound` if no record exists, `PhoneNotFound` if no phone
    /// matches `old`, `Validation` if `new` is malformed.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        let new = PhoneNumber::new(new)?;
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        record.replace_phone(old, new)?;
        debug!("phone {} updated on contact {}", old, name);
        Ok("Phone number updated.".to_string())
    }

    /// Comma-joined phone list for the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no record exists.
    pub fn phones(&self, name: &str) -> BookResult<String> {
        let record = self
            .records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(record.phone_list())
    }

    /// Render every record, one per line, in sorted name order.
    pub fn render_all(&self) -> String {
        if self.records.is_empty() {
            return "No contacts saved.".to_string();
        }
        self.records
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Set the birthday on the record stored under `name`.
    ///
    /// # Errors
    ///
    /// `ContactNotFound` if no record exists, `Validation` if the value is
    /// malformed, `BirthdayAlreadySet` if the record already has one.
    pub fn add_birthday(&mut self, name: &str, value: &str) -> BookResult<String> {
        let birthday = Birthday::new(value)?;
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        record.set_birthday(birthday)?;
        debug!("birthday added to contact {}", name);
        Ok("Birthday added.".to_string())
    }

    /// Birthday of the record stored under `name`, or a not-set notice.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no record exists.
    pub fn show_birthday(&self, name: &str) -> BookResult<String> {
        let record = self
            .records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(match record.birthday() {
            Some(birthday) => birthday.to_string(),
            None => format!("No birthday set for {}.", name),
        })
    }

    /// Records whose birthday month/day falls within the next `window_days`
    /// calendar days strictly after `today`.
    ///
    /// Matches are collected per record in sorted name order, then per day in
    /// window order, and joined as `"{date}: {name}"` pairs. Only month and
    /// day are compared; there is no February 29 special-casing, so a
    /// leap-day birthday matches only when the window actually contains a
    /// February 29.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> String {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            for offset in 1..=u64::from(window_days) {
                let day = today + Days::new(offset);
                if (day.month(), day.day()) == birthday.month_day() {
                    upcoming.push(format!("{}: {}", day, record.name()));
                }
            }
        }
        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }
        upcoming.join(" | ")
    }
}
