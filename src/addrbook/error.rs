use crate::fields::FieldError;
use crate::model::NoteId;
use std::fmt;
use thiserror::Error;

/// The single-value optional fields of a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Birthday,
    Email,
    Address,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Birthday => "birthday",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("{0}")]
    Format(#[from] FieldError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("The {0} is already set")]
    AlreadySet(FieldKind),

    #[error("The {0} is not set")]
    NotSet(FieldKind),

    #[error("The note is already tagged with '{0}'")]
    AlreadyTagged(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl AddrBookError {
    /// True for every lookup failure (contact, phone, note or tag).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AddrBookError::ContactNotFound(_)
                | AddrBookError::PhoneNotFound(_)
                | AddrBookError::NoteNotFound(_)
                | AddrBookError::TagNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
