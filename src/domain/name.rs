//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The name a contact is stored under.
///
/// Names carry no format rules; construction never fails. Uniqueness is
/// the address book's concern, not the name's.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::ContactName;
///
/// let name = ContactName::new("Alice");
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContactName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// Lets name-keyed maps be queried with a plain `&str`
impl Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
