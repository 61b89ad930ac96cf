use crate::commands::{CmdMessage, CmdResult, ListedNote};
use crate::error::{AddrBookError, Result};
use crate::model::{Note, NoteId};
use crate::notebook::NoteBook;

fn listed(book: &NoteBook, id: NoteId) -> Result<ListedNote> {
    let note = book.get(id).ok_or(AddrBookError::NoteNotFound(id))?;
    Ok(ListedNote {
        id,
        note: note.clone(),
    })
}

fn collect(found: Vec<(NoteId, &Note)>) -> Vec<ListedNote> {
    found
        .into_iter()
        .map(|(id, note)| ListedNote {
            id,
            note: note.clone(),
        })
        .collect()
}

pub fn add(book: &mut NoteBook, text: &str) -> Result<CmdResult> {
    let note = Note::new(text)?;
    let id = book.add_note(note)?;
    Ok(CmdResult::default()
        .with_affected_notes(vec![listed(book, id)?])
        .with_message(CmdMessage::success(format!("Note {id} added."))))
}

pub fn edit(book: &mut NoteBook, id: NoteId, text: &str) -> Result<CmdResult> {
    book.edit_note(id, text)?;
    Ok(CmdResult::default()
        .with_affected_notes(vec![listed(book, id)?])
        .with_message(CmdMessage::success(format!("Note {id} updated."))))
}

pub fn delete(book: &mut NoteBook, id: NoteId) -> Result<CmdResult> {
    let note = book.delete_note(id)?;
    Ok(CmdResult::default()
        .with_affected_notes(vec![ListedNote { id, note }])
        .with_message(CmdMessage::success(format!("Note {id} deleted."))))
}

pub fn add_tag(book: &mut NoteBook, id: NoteId, tag: &str) -> Result<CmdResult> {
    book.add_tag(id, tag)?;
    Ok(CmdResult::default()
        .with_affected_notes(vec![listed(book, id)?])
        .with_message(CmdMessage::success(format!(
            "Tag '{tag}' added to note {id}."
        ))))
}

pub fn delete_tag(book: &mut NoteBook, id: NoteId, tag: &str) -> Result<CmdResult> {
    book.remove_tag(id, tag)?;
    Ok(CmdResult::default()
        .with_affected_notes(vec![listed(book, id)?])
        .with_message(CmdMessage::success(format!(
            "Tag '{tag}' removed from note {id}."
        ))))
}

pub fn find_tag(book: &NoteBook, tag: &str) -> Result<CmdResult> {
    let found = collect(book.find_by_tag(tag));
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes found with tag '{tag}'.")));
    }
    Ok(result.with_listed_notes(found))
}

pub fn search(book: &NoteBook, query: &str) -> Result<CmdResult> {
    let found = collect(book.search(query));
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes match '{query}'.")));
    }
    Ok(result.with_listed_notes(found))
}

pub fn show(book: &NoteBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_notes(collect(book.iter().collect()));
    if book.is_empty() {
        result.add_message(CmdMessage::info("No notes saved yet."));
    }
    Ok(result)
}
