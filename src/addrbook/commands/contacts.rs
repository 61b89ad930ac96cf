use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::fields::{Name, Phone};
use crate::model::Record;

/// Adds `phone` to the contact called `name`, creating the contact if needed.
///
/// Both values are validated before the book is touched, so a bad phone never
/// leaves an empty new contact behind.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let name = Name::new(name)?;
    Phone::new(phone)?;

    let (record, message) = match book.find_mut(name.as_str()) {
        Some(existing) => {
            existing.add_phone(phone)?;
            (existing.clone(), "Contact updated.")
        }
        None => {
            let mut record = Record::with_name(name);
            record.add_phone(phone)?;
            book.add_record(record.clone());
            (record, "Contact added.")
        }
    };

    Ok(CmdResult::default()
        .with_affected_contacts(vec![record])
        .with_message(CmdMessage::success(message)))
}

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    record.edit_phone(old, new)?;
    let record = record.clone();
    Ok(CmdResult::default()
        .with_affected_contacts(vec![record])
        .with_message(CmdMessage::success(format!(
            "Phone number for {name} updated."
        ))))
}

/// The full row of one contact.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_listed_contacts(vec![record.clone()]))
}

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_contacts(book.iter().cloned().collect());
    if book.is_empty() {
        result.add_message(CmdMessage::info("No contacts saved yet."));
    }
    Ok(result)
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.delete(name)?;
    Ok(CmdResult::default()
        .with_affected_contacts(vec![removed])
        .with_message(CmdMessage::success(format!("Contact {name} deleted."))))
}

pub fn search(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let found: Vec<Record> = book.search(query).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{query}'.")));
    }
    Ok(result.with_listed_contacts(found))
}
