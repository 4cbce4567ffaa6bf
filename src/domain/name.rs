//! ContactName value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The name is the key under which a record lives in the address book, so it
/// is validated to be non-blank at construction time. No other constraint is
/// applied.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("alice").unwrap();
/// assert_eq!(name.as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or
    /// whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
