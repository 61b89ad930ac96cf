//! # API Facade
//!
//! The single entry point for every addrbook operation, whatever the UI.
//!
//! `AddrBookApi` owns the storage backend together with the books loaded from it
//! and the active configuration. Each method:
//! - **Normalizes inputs** (note ids arrive as text and are parsed here)
//! - **Dispatches** to the matching function in `commands/`
//! - **Returns** `Result<CmdResult>`, never strings for the terminal
//!
//! Mutations only touch the in-memory books. Nothing reaches the store until
//! [`save`](AddrBookApi::save) is called, which the CLI does on exit.
//!
//! ## Generic Over DataStore
//!
//! - Production: `AddrBookApi<FileStore>`
//! - Testing: `AddrBookApi<InMemoryStore>`

use crate::birthdays::BirthdayWindow;
use crate::book::AddressBook;
use crate::commands;
use crate::config::AddrBookConfig;
use crate::error::{AddrBookError, FieldKind, Result};
use crate::model::NoteId;
use crate::notebook::NoteBook;
use crate::store::{load_or_default, DataStore};
use chrono::NaiveDate;
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::details::DetailAction;
pub use crate::commands::{CmdMessage, CmdResult, ListedNote, MessageLevel};

pub struct AddrBookApi<S: DataStore> {
    store: S,
    contacts: AddressBook,
    notes: NoteBook,
    config: AddrBookConfig,
    config_dir: PathBuf,
}

impl<S: DataStore> AddrBookApi<S> {
    /// Loads both books from `store`. Unreadable data is replaced with an empty book.
    pub fn open(store: S, config: AddrBookConfig, config_dir: PathBuf) -> Self {
        let contacts = load_or_default("contacts", store.load_contacts());
        let notes = load_or_default("notes", store.load_notes());
        Self {
            store,
            contacts,
            notes,
            config,
            config_dir,
        }
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.contacts
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    pub fn config(&self) -> &AddrBookConfig {
        &self.config
    }

    /// Writes both books to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_contacts(&self.contacts)?;
        self.store.save_notes(&self.notes)?;
        Ok(())
    }

    // --- Contacts ---

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contacts::add(&mut self.contacts, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::contacts::change(&mut self.contacts, name, old, new)
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show(&self.contacts, name)
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        commands::contacts::all(&self.contacts)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::contacts::delete(&mut self.contacts, name)
    }

    pub fn search_contacts(&self, query: &str) -> Result<CmdResult> {
        commands::contacts::search(&self.contacts, query)
    }

    pub fn contact_detail(
        &mut self,
        name: &str,
        kind: FieldKind,
        action: DetailAction,
    ) -> Result<CmdResult> {
        commands::details::run(&mut self.contacts, name, kind, action)
    }

    /// Upcoming birthdays as of `today`. `days` overrides the configured window.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: Option<u32>) -> Result<CmdResult> {
        let window: BirthdayWindow = self.config.birthday_window(days);
        commands::birthdays::run(&self.contacts, today, window)
    }

    // --- Notes ---

    pub fn add_note(&mut self, text: &str) -> Result<CmdResult> {
        commands::notes::add(&mut self.notes, text)
    }

    pub fn edit_note(&mut self, id: &str, text: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        commands::notes::edit(&mut self.notes, id, text)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        commands::notes::delete(&mut self.notes, id)
    }

    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        commands::notes::add_tag(&mut self.notes, id, tag)
    }

    pub fn delete_tag(&mut self, id: &str, tag: &str) -> Result<CmdResult> {
        let id = parse_note_id(id)?;
        commands::notes::delete_tag(&mut self.notes, id, tag)
    }

    pub fn find_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::notes::find_tag(&self.notes, tag)
    }

    pub fn search_notes(&self, query: &str) -> Result<CmdResult> {
        commands::notes::search(&self.notes, query)
    }

    pub fn show_notes(&self) -> Result<CmdResult> {
        commands::notes::show(&self.notes)
    }

    // --- Config ---

    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.config, &self.config_dir, action)
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId> {
    raw.trim()
        .parse::<NoteId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AddrBookError::Api(format!("Invalid note id: {raw}")))
}
