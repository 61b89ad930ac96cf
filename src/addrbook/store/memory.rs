use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use crate::notebook::NoteBook;

/// In-memory storage for testing.
///
/// Books are kept as serialized JSON, so a save/load cycle goes through the same
/// serde path as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Option<String>,
    notes: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored contacts JSON verbatim, e.g. to simulate a corrupt file.
    pub fn with_raw_contacts(mut self, json: impl Into<String>) -> Self {
        self.contacts = Some(json.into());
        self
    }

    pub fn with_raw_notes(mut self, json: impl Into<String>) -> Self {
        self.notes = Some(json.into());
        self
    }
}

fn decode<T: serde::de::DeserializeOwned + Default>(raw: &Option<String>) -> Result<T> {
    match raw {
        Some(json) => serde_json::from_str(json).map_err(AddrBookError::Serialization),
        None => Ok(T::default()),
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        decode(&self.contacts)
    }

    fn save_contacts(&mut self, contacts: &AddressBook) -> Result<()> {
        self.contacts = Some(serde_json::to_string(contacts)?);
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteBook> {
        decode(&self.notes)
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        self.notes = Some(serde_json::to_string(notes)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Note, Record};

    /// Builds an `InMemoryStore` that already holds some data.
    #[derive(Default)]
    pub struct StoreFixture {
        pub contacts: AddressBook,
        pub notes: NoteBook,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a contact with one phone and an optional `DD.MM.YYYY` birthday.
        pub fn with_contact(mut self, name: &str, phone: &str, birthday: Option<&str>) -> Self {
            let mut record = Record::new(name).unwrap();
            record.add_phone(phone).unwrap();
            if let Some(bd) = birthday {
                record.add_birthday(bd).unwrap();
            }
            self.contacts.add_record(record);
            self
        }

        pub fn with_note(mut self, text: &str, tags: &[&str]) -> Self {
            let id = self.notes.add_note(Note::new(text).unwrap()).unwrap();
            for tag in tags {
                self.notes.add_tag(id, tag).unwrap();
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store.save_contacts(&self.contacts).unwrap();
            store.save_notes(&self.notes).unwrap();
            store
        }
    }
}
