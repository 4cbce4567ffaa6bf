//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Input shape: two-digit day, two-digit month, four-digit year.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("Failed to compile birthday regex"));

/// The one accepted input and display format.
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A type-safe wrapper for birthdays.
///
/// Accepts the literal `DD-MM-YYYY` pattern, and the named day must be a
/// valid calendar date. Stored as a [`NaiveDate`] and rendered back in
/// `DD-MM-YYYY`. No locale handling, no normalization beyond what date
/// parsing enforces.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("24-03-1995").unwrap();
/// assert_eq!(birthday.to_string(), "24-03-1995");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD-MM-YYYY` exactly (zero-padded day and month)
    /// - The day must exist on the calendar
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if either rule fails.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;

        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month and day, for matching against upcoming calendar days.
    pub fn month_day(&self) -> (u32, u32) {
        (self.0.month(), self.0.day())
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01-01-2000").unwrap();
        assert_eq!(birthday.month_day(), (1, 1));
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_birthday_validates_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1-1-2000").is_err());
        assert!(Birthday::new("01/01/2000").is_err());
        assert!(Birthday::new("2000-01-01").is_err());
        assert!(Birthday::new("01-01-00").is_err());
        assert!(Birthday::new("01-01-2000 ").is_err());
    }

    #[test]
    fn test_birthday_validates_calendar() {
        assert!(Birthday::new("32-01-2000").is_err());
        assert!(Birthday::new("01-13-2000").is_err());
        assert!(Birthday::new("31-04-2000").is_err());
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(Birthday::new("29-02-2000").is_ok());
        assert!(Birthday::new("29-02-2001").is_err());
    }

    #[test]
    fn test_birthday_display_round_trips() {
        let birthday = Birthday::new("24-03-1995").unwrap();
        assert_eq!(format!("{}", birthday), "24-03-1995");
    }
}
