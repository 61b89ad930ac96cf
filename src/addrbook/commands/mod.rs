//! # Commands
//!
//! One module per command family. A command takes the in-memory books and its
//! already-split arguments, runs validate-then-mutate against the domain types,
//! and returns a [`CmdResult`]: the entities it touched or listed plus a list of
//! messages for the user.
//!
//! Commands never print. Domain failures come back as `Err` and are turned into
//! text by the CLI; "nothing to show" outcomes are ordinary results carrying an
//! info message.

use crate::birthdays::UpcomingBirthday;
use crate::config::AddrBookConfig;
use crate::model::{Note, NoteId, Record};

pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod details;
pub mod notes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note together with the id it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedNote {
    pub id: NoteId,
    pub note: Note,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Record>,
    pub listed_contacts: Vec<Record>,
    pub affected_notes: Vec<ListedNote>,
    pub listed_notes: Vec<ListedNote>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub config: Option<AddrBookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<ListedNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<ListedNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config(mut self, config: AddrBookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
