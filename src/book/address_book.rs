//! The address book: a name-keyed table of contact records.

use super::birthdays::{BirthdayWindow, BirthdayWindowPolicy};
use crate::domain::ContactName;
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// In-memory contact table keyed by name.
///
/// Iteration follows first-insertion order. Re-adding a name replaces the
/// whole record but keeps the name's original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<ContactName, ContactRecord>,
    order: Vec<ContactName>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any existing record.
    ///
    /// Nothing is merged: phones and birthday of the replaced record are gone.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().clone();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(contact = %name, "Replaced existing contact");
        } else {
            self.order.push(name);
        }
    }

    /// Remove the record filed under `name`, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n.as_str() != name);
        Some(removed)
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Exact-name lookup returning a handle whose changes land in the book.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Records whose birthday falls in `[today, today + days)` under `policy`.
    pub fn birthdays_in_window(
        &self,
        today: NaiveDate,
        days: u32,
        policy: BirthdayWindowPolicy,
    ) -> Vec<&ContactRecord> {
        self.birthdays_in(&BirthdayWindow::new(today, days, policy))
    }

    /// Records whose stored birthday falls within the seven days from `today`.
    pub fn birthdays_this_week(&self, today: NaiveDate) -> Vec<&ContactRecord> {
        self.birthdays_in(&BirthdayWindow::this_week(today))
    }

    fn birthdays_in(&self, window: &BirthdayWindow) -> Vec<&ContactRecord> {
        self.iter()
            .filter(|record| record.birthday().is_some_and(|b| window.contains(b)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = Box<dyn Iterator<Item = &'a ContactRecord> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
