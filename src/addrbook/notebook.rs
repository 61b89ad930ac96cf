use crate::error::{AddrBookError, Result};
use crate::fields::Tag;
use crate::model::{Note, NoteId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All notes, keyed by a numeric id.
///
/// Ids start at 1 and only grow: a new note gets one more than the highest id
/// ever issued, so deleting the newest note does not free its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBook {
    #[serde(default)]
    last_id: NoteId,
    #[serde(default)]
    notes: BTreeMap<NoteId, Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `note` under the next id. Fails once the id space is used up.
    pub fn add_note(&mut self, note: Note) -> Result<NoteId> {
        let max_stored = self.notes.keys().next_back().copied().unwrap_or(0);
        let id = self
            .last_id
            .max(max_stored)
            .checked_add(1)
            .ok_or_else(|| AddrBookError::Store("note id space exhausted".to_string()))?;
        self.last_id = id;
        self.notes.insert(id, note);
        tracing::debug!(id, "added note");
        Ok(id)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    fn get_mut(&mut self, id: NoteId) -> Result<&mut Note> {
        self.notes
            .get_mut(&id)
            .ok_or(AddrBookError::NoteNotFound(id))
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<Note> {
        let removed = self
            .notes
            .remove(&id)
            .ok_or(AddrBookError::NoteNotFound(id))?;
        tracing::debug!(id, "deleted note");
        Ok(removed)
    }

    pub fn edit_note(&mut self, id: NoteId, text: &str) -> Result<()> {
        let note = self.get_mut(id)?;
        note.edit_text(text)?;
        tracing::debug!(id, "edited note");
        Ok(())
    }

    pub fn add_tag(&mut self, id: NoteId, raw: &str) -> Result<()> {
        self.get_mut(id)?.add_tag(raw)?;
        tracing::debug!(id, tag = raw, "tagged note");
        Ok(())
    }

    pub fn remove_tag(&mut self, id: NoteId, raw: &str) -> Result<Tag> {
        let tag = self.get_mut(id)?.remove_tag(raw)?;
        tracing::debug!(id, tag = raw, "untagged note");
        Ok(tag)
    }

    /// Notes carrying exactly `tag` (case-sensitive, no substring matching).
    pub fn find_by_tag(&self, tag: &str) -> Vec<(NoteId, &Note)> {
        self.iter().filter(|(_, note)| note.has_tag(tag)).collect()
    }

    /// Case-insensitive substring match on note text.
    pub fn search(&self, query: &str) -> Vec<(NoteId, &Note)> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|(_, note)| note.text().to_lowercase().contains(&needle))
            .collect()
    }

    /// Notes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &Note)> {
        self.notes.iter().map(|(id, note)| (*id, note))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldError;

    fn note(text: &str) -> Note {
        Note::new(text).unwrap()
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut book = NoteBook::new();
        assert_eq!(book.add_note(note("a")).unwrap(), 1);
        assert_eq!(book.add_note(note("b")).unwrap(), 2);
        assert_eq!(book.add_note(note("c")).unwrap(), 3);
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let mut book = NoteBook::new();
        let first = book.add_note(note("a")).unwrap();
        book.delete_note(first).unwrap();
        let second = book.add_note(note("b")).unwrap();
        assert_ne!(first, second);
        assert_eq!(second, first + 1);
    }

    #[test]
    fn deleting_a_middle_note_keeps_counting_from_max() {
        let mut book = NoteBook::new();
        book.add_note(note("a")).unwrap();
        book.add_note(note("b")).unwrap();
        book.add_note(note("c")).unwrap();
        book.delete_note(2).unwrap();
        assert_eq!(book.add_note(note("d")).unwrap(), 4);
    }

    #[test]
    fn delete_missing_note() {
        let mut book = NoteBook::new();
        assert!(matches!(
            book.delete_note(7),
            Err(AddrBookError::NoteNotFound(7))
        ));
    }

    #[test]
    fn tags_on_missing_note() {
        let mut book = NoteBook::new();
        assert!(matches!(
            book.add_tag(1, "x"),
            Err(AddrBookError::NoteNotFound(1))
        ));
        assert!(matches!(
            book.remove_tag(1, "x"),
            Err(AddrBookError::NoteNotFound(1))
        ));
    }

    #[test]
    fn duplicate_tag_rejected_per_note_only() {
        let mut book = NoteBook::new();
        let a = book.add_note(note("a")).unwrap();
        let b = book.add_note(note("b")).unwrap();
        book.add_tag(a, "work").unwrap();
        book.add_tag(b, "work").unwrap();
        assert!(matches!(
            book.add_tag(a, "work"),
            Err(AddrBookError::AlreadyTagged(_))
        ));
        assert!(matches!(
            book.add_tag(a, ""),
            Err(AddrBookError::Format(FieldError::EmptyTag))
        ));
    }

    #[test]
    fn remove_tag_not_on_note() {
        let mut book = NoteBook::new();
        let id = book.add_note(note("a")).unwrap();
        assert!(matches!(
            book.remove_tag(id, "nope"),
            Err(AddrBookError::TagNotFound(_))
        ));
    }

    #[test]
    fn find_by_tag_is_exact() {
        let mut book = NoteBook::new();
        let x = book.add_note(note("tagged x")).unwrap();
        let xy = book.add_note(note("tagged xy")).unwrap();
        let upper = book.add_note(note("tagged X")).unwrap();
        book.add_tag(x, "x").unwrap();
        book.add_tag(xy, "xy").unwrap();
        book.add_tag(upper, "X").unwrap();

        let found: Vec<NoteId> = book.find_by_tag("x").into_iter().map(|(id, _)| id).collect();
        assert_eq!(found, vec![x]);
        assert!(book.find_by_tag("").is_empty());
    }

    #[test]
    fn edit_note_validates() {
        let mut book = NoteBook::new();
        let id = book.add_note(note("draft")).unwrap();
        book.edit_note(id, "final").unwrap();
        assert_eq!(book.get(id).unwrap().text(), "final");
        assert!(book.edit_note(id, " ").is_err());
        assert_eq!(book.get(id).unwrap().text(), "final");
        assert!(matches!(
            book.edit_note(99, "x"),
            Err(AddrBookError::NoteNotFound(99))
        ));
    }

    #[test]
    fn search_text() {
        let mut book = NoteBook::new();
        book.add_note(note("Buy milk")).unwrap();
        book.add_note(note("Call mom")).unwrap();
        let found = book.search("MILK");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 1);
    }

    #[test]
    fn json_roundtrip_keeps_counter() {
        let mut book = NoteBook::new();
        let id = book.add_note(note("a")).unwrap();
        book.add_tag(id, "t").unwrap();
        book.delete_note(id).unwrap();

        let json = serde_json::to_string(&book).unwrap();
        let mut back: NoteBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
        assert_eq!(back.add_note(note("b")).unwrap(), 2);
    }

    #[test]
    fn missing_counter_falls_back_to_max_id() {
        let json = r#"{"notes":{"5":{"text":"x","tags":[],"created_at":"2024-01-01T10:00:00Z"}}}"#;
        let mut book: NoteBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.add_note(note("y")).unwrap(), 6);
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let json = r#"{"last_id":4294967295,"notes":{}}"#;
        let mut book: NoteBook = serde_json::from_str(json).unwrap();
        assert!(matches!(
            book.add_note(note("late")),
            Err(AddrBookError::Store(_))
        ));
        assert!(book.is_empty());
    }
}
