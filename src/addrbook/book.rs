use crate::birthdays::{self, BirthdayWindow, UpcomingBirthday};
use crate::error::{AddrBookError, Result};
use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All contacts, keyed by name.
///
/// Every record sits under the key equal to its own name. Adding a record whose
/// name is already present replaces the old one; callers that want to extend an
/// existing contact go through [`find_mut`](Self::find_mut) instead.
///
/// Persisted as a plain list of records so the key can never disagree with the
/// name after a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record stored under its name.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().to_string();
        tracing::debug!(name = %key, "storing contact");
        self.records.insert(key, record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Like [`find_mut`](Self::find_mut), but a missing contact is an error.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let removed = self
            .records
            .remove(name)
            .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))?;
        tracing::debug!(name, "deleted contact");
        Ok(removed)
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring match on name, email and phone numbers.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle)
                    || record
                        .email()
                        .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
                    || record.phones().iter().any(|p| p.as_str().contains(&needle))
            })
            .collect()
    }

    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming(self.iter(), today, window)
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.records.insert(record.name().to_string(), record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
