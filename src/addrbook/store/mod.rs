//! # Storage Layer
//!
//! The books live in memory while the program runs. This module is how they get
//! to disk and back: the [`DataStore`] trait saves and loads each book as one
//! opaque whole.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a data directory
//! - [`memory::InMemoryStore`]: keeps the serialized JSON in memory, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── contacts.json   # JSON array of records
//! ├── notes.json      # {"last_id": n, "notes": {"1": {...}, ...}}
//! └── config.json     # AddrBookConfig
//! ```
//!
//! ## Failure Policy
//!
//! Backends report errors honestly. Falling back to an empty book when the data
//! is missing or unreadable is the caller's decision, made in
//! [`load_or_default`].

use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::NoteBook;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the books.
pub trait DataStore {
    /// Load the address book. Absent data is an empty book, not an error.
    fn load_contacts(&self) -> Result<AddressBook>;

    fn save_contacts(&mut self, contacts: &AddressBook) -> Result<()>;

    /// Load the notebook. Absent data is an empty notebook, not an error.
    fn load_notes(&self) -> Result<NoteBook>;

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()>;
}

/// Unwraps a load result, replacing any failure with an empty value.
pub fn load_or_default<T: Default>(what: &str, loaded: Result<T>) -> T {
    match loaded {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "could not load {what}, starting empty");
            T::default()
        }
    }
}
