//! Contact record: one person's name, phones, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the address book.
///
/// Records are created with a name and no phones, then mutated in place.
/// Phone numbers keep their insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Name the record is filed under
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The first phone added, if any.
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns the validation error when `raw` is not a 10-digit number;
    /// the phone list is left untouched.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw).map_err(|e| {
            tracing::debug!(contact = %self.name, phone = %raw, "Rejected phone number");
            e
        })?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`. Returns whether one was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`.
    ///
    /// Returns `Ok(false)` without touching the list when `old` is absent.
    /// The removal happens before `new` is validated, so an invalid `new`
    /// leaves the record without `old`.
    ///
    /// # Errors
    ///
    /// Returns the validation error for `new` once `old` has been removed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        if !self.remove_phone(old) {
            return Ok(false);
        }
        self.add_phone(new)?;
        Ok(true)
    }

    /// Validate `raw` and store it as the birthday, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns the validation error when `raw` is not a real `DD.MM.YYYY`
    /// date; the stored birthday is left untouched.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new("Alice");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_strs(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("Alice");
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert!(record.first_phone().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(
            phone_strs(&record),
            vec!["1111111111", "2222222222", "1111111111"]
        );
        assert_eq!(record.first_phone().unwrap().as_str(), "1111111111");
    }

    #[test]
    fn test_add_phone_invalid_has_no_effect() {
        let mut record = record_with(&["1111111111"]);
        let err = record.add_phone("123").unwrap_err();
        assert!(err.to_string().contains("10-digit"));
        assert_eq!(phone_strs(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        assert!(record.remove_phone("1111111111"));
        assert_eq!(phone_strs(&record), vec!["2222222222", "1111111111"]);
        assert!(!record.remove_phone("3333333333"));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_success() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(record.edit_phone("1111111111", "3333333333"), Ok(true));
        assert_eq!(phone_strs(&record), vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_old_is_noop() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(record.edit_phone("9999999999", "3333333333"), Ok(false));
        assert_eq!(phone_strs(&record), vec!["1111111111"]);

        // An invalid replacement is never looked at when old is missing
        assert_eq!(record.edit_phone("9999999999", "bad"), Ok(false));
        assert_eq!(phone_strs(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_loses_old() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        assert!(record.edit_phone("1111111111", "12").is_err());
        assert_eq!(phone_strs(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = ContactRecord::new("Bob");
        record.add_birthday("15.03.1995").unwrap();
        record.add_birthday("16.04.1996").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "16.04.1996");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = ContactRecord::new("Bob");
        record.add_birthday("15.03.1995").unwrap();
        assert!(record.add_birthday("31.02.2000").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "15.03.1995");
    }

    #[test]
    fn test_display() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );

        record.add_birthday("01.01.2000").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222, birthday: 01.01.2000"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = ContactRecord::new("Eve");
        assert_eq!(record.to_string(), "Contact name: Eve, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record_with(&["1111111111"]);
        record.add_birthday("01.01.2000").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["1111111111"],"birthday":"01.01.2000"}"#
        );

        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_rejects_bad_phone() {
        let json = r#"{"name":"Alice","phones":["123"]}"#;
        let result: Result<ContactRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
