use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use crate::notebook::NoteBook;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONTACTS_FILENAME: &str = "contacts.json";
pub const NOTES_FILENAME: &str = "notes.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(CONTACTS_FILENAME)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AddrBookError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no data file yet");
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(AddrBookError::Io)?;
        let value = serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        tracing::info!(path = %path.display(), "loaded");
        Ok(value)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(AddrBookError::Serialization)?;
        fs::write(path, content).map_err(AddrBookError::Io)?;
        tracing::info!(path = %path.display(), "saved");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        self.read_json(&self.contacts_path())
    }

    fn save_contacts(&mut self, contacts: &AddressBook) -> Result<()> {
        self.write_json(&self.contacts_path(), contacts)
    }

    fn load_notes(&self) -> Result<NoteBook> {
        self.read_json(&self.notes_path())
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        self.write_json(&self.notes_path(), notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Record};
    use tempfile::TempDir;

    #[test]
    fn missing_files_load_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("not-created-yet"));
        assert!(store.load_contacts().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn save_creates_directory_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        let mut contacts = AddressBook::new();
        let mut anna = Record::new("Anna").unwrap();
        anna.add_phone("0501234567").unwrap();
        anna.add_birthday("01.01.1990").unwrap();
        contacts.add_record(anna);

        let mut notes = NoteBook::new();
        let id = notes.add_note(Note::new("buy milk").unwrap()).unwrap();
        notes.add_tag(id, "home").unwrap();

        store.save_contacts(&contacts).unwrap();
        store.save_notes(&notes).unwrap();
        assert!(store.contacts_path().exists());
        assert!(store.notes_path().exists());

        assert_eq!(store.load_contacts().unwrap(), contacts);
        assert_eq!(store.load_notes().unwrap(), notes);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.contacts_path(), "{ not json").unwrap();
        assert!(matches!(
            store.load_contacts(),
            Err(AddrBookError::Serialization(_))
        ));
    }

    #[test]
    fn invalid_field_in_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(
            store.contacts_path(),
            r#"[{"name":"Anna","phones":["12-34"]}]"#,
        )
        .unwrap();
        assert!(store.load_contacts().is_err());
    }
}
