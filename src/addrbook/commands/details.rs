//! Birthday, email and address: the single-value fields of a contact.
//!
//! All three share one lifecycle (add on an empty slot, change or delete a
//! filled one, show whatever is there), so one command drives them, selected by
//! [`FieldKind`].

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, FieldKind, Result};
use crate::model::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    Add(String),
    Change(String),
    Delete,
    Show,
}

pub fn run(
    book: &mut AddressBook,
    name: &str,
    kind: FieldKind,
    action: DetailAction,
) -> Result<CmdResult> {
    let record = book.get_mut(name)?;

    let message = match action {
        DetailAction::Add(raw) => {
            add(record, kind, &raw)?;
            CmdMessage::success(format!("{} added for {name}.", capitalized(kind)))
        }
        DetailAction::Change(raw) => {
            edit(record, kind, &raw)?;
            CmdMessage::success(format!("{} updated for {name}.", capitalized(kind)))
        }
        DetailAction::Delete => {
            remove(record, kind)?;
            CmdMessage::success(format!("{} deleted for {name}.", capitalized(kind)))
        }
        DetailAction::Show => {
            let value = current(record, kind).ok_or(AddrBookError::NotSet(kind))?;
            CmdMessage::info(format!("{name}'s {kind}: {value}"))
        }
    };

    Ok(CmdResult::default()
        .with_affected_contacts(vec![record.clone()])
        .with_message(message))
}

fn add(record: &mut Record, kind: FieldKind, raw: &str) -> Result<()> {
    match kind {
        FieldKind::Birthday => record.add_birthday(raw),
        FieldKind::Email => record.add_email(raw),
        FieldKind::Address => record.add_address(raw),
    }
}

fn edit(record: &mut Record, kind: FieldKind, raw: &str) -> Result<()> {
    match kind {
        FieldKind::Birthday => record.edit_birthday(raw),
        FieldKind::Email => record.edit_email(raw),
        FieldKind::Address => record.edit_address(raw),
    }
}

fn remove(record: &mut Record, kind: FieldKind) -> Result<()> {
    match kind {
        FieldKind::Birthday => record.remove_birthday().map(drop),
        FieldKind::Email => record.remove_email().map(drop),
        FieldKind::Address => record.remove_address().map(drop),
    }
}

fn current(record: &Record, kind: FieldKind) -> Option<String> {
    match kind {
        FieldKind::Birthday => record.birthday().map(ToString::to_string),
        FieldKind::Email => record.email().map(ToString::to_string),
        FieldKind::Address => record.address().map(ToString::to_string),
    }
}

fn capitalized(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Birthday => "Birthday",
        FieldKind::Email => "Email",
        FieldKind::Address => "Address",
    }
}
