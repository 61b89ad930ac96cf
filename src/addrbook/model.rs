use crate::error::{AddrBookError, FieldKind, Result};
use crate::fields::{Address, Birthday, Email, FieldError, Name, Phone, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a note inside a [`NoteBook`](crate::notebook::NoteBook).
pub type NoteId = u32;

/// Placeholder shown for an optional field that is not set.
pub const NOT_AVAILABLE: &str = "N/A";

/// One contact.
///
/// The name is fixed at construction and is the key the record lives under in an
/// [`AddressBook`](crate::book::AddressBook). Birthday, email and address are
/// single-value fields: `add_*` only works on an empty slot, `edit_*` and
/// `remove_*` only on a filled one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    // --- Phones ---

    /// Appends a phone. The same number may be added twice.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        tracing::debug!(name = %self.name, "added phone");
        Ok(())
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<Phone> {
        let pos = self.phone_position(value)?;
        tracing::debug!(name = %self.name, "removed phone");
        Ok(self.phones.remove(pos))
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// Fails with `PhoneNotFound` before looking at `new`, and with a format
    /// error if `new` is invalid. The phone list is untouched on failure.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self.phone_position(old)?;
        let phone = Phone::new(new)?;
        self.phones[pos] = phone;
        tracing::debug!(name = %self.name, "changed phone");
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    fn phone_position(&self, value: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| AddrBookError::PhoneNotFound(value.to_string()))
    }

    // --- Birthday ---

    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        ensure_empty(&self.birthday, FieldKind::Birthday)?;
        self.birthday = Some(Birthday::new(raw)?);
        self.log_field(FieldKind::Birthday, "set");
        Ok(())
    }

    pub fn edit_birthday(&mut self, raw: &str) -> Result<()> {
        ensure_present(&self.birthday, FieldKind::Birthday)?;
        self.birthday = Some(Birthday::new(raw)?);
        self.log_field(FieldKind::Birthday, "changed");
        Ok(())
    }

    pub fn remove_birthday(&mut self) -> Result<Birthday> {
        let removed = take_present(&mut self.birthday, FieldKind::Birthday)?;
        self.log_field(FieldKind::Birthday, "removed");
        Ok(removed)
    }

    // --- Email ---

    pub fn add_email(&mut self, raw: &str) -> Result<()> {
        ensure_empty(&self.email, FieldKind::Email)?;
        self.email = Some(Email::new(raw)?);
        self.log_field(FieldKind::Email, "set");
        Ok(())
    }

    pub fn edit_email(&mut self, raw: &str) -> Result<()> {
        ensure_present(&self.email, FieldKind::Email)?;
        self.email = Some(Email::new(raw)?);
        self.log_field(FieldKind::Email, "changed");
        Ok(())
    }

    pub fn remove_email(&mut self) -> Result<Email> {
        let removed = take_present(&mut self.email, FieldKind::Email)?;
        self.log_field(FieldKind::Email, "removed");
        Ok(removed)
    }

    // --- Address ---

    pub fn add_address(&mut self, raw: &str) -> Result<()> {
        ensure_empty(&self.address, FieldKind::Address)?;
        self.address = Some(Address::new(raw)?);
        self.log_field(FieldKind::Address, "set");
        Ok(())
    }

    pub fn edit_address(&mut self, raw: &str) -> Result<()> {
        ensure_present(&self.address, FieldKind::Address)?;
        self.address = Some(Address::new(raw)?);
        self.log_field(FieldKind::Address, "changed");
        Ok(())
    }

    pub fn remove_address(&mut self) -> Result<Address> {
        let removed = take_present(&mut self.address, FieldKind::Address)?;
        self.log_field(FieldKind::Address, "removed");
        Ok(removed)
    }

    fn log_field(&self, kind: FieldKind, action: &str) {
        tracing::debug!(name = %self.name, field = %kind, action, "updated contact field");
    }

    /// Display fields in column order: name, phones, birthday, email, address.
    pub fn row(&self) -> [String; 5] {
        [
            self.name.to_string(),
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; "),
            or_not_available(self.birthday.as_ref()),
            or_not_available(self.email.as_ref()),
            or_not_available(self.address.as_ref()),
        ]
    }
}

fn ensure_empty<T>(slot: &Option<T>, kind: FieldKind) -> Result<()> {
    match slot {
        Some(_) => Err(AddrBookError::AlreadySet(kind)),
        None => Ok(()),
    }
}

fn ensure_present<T>(slot: &Option<T>, kind: FieldKind) -> Result<()> {
    match slot {
        Some(_) => Ok(()),
        None => Err(AddrBookError::NotSet(kind)),
    }
}

fn take_present<T>(slot: &mut Option<T>, kind: FieldKind) -> Result<T> {
    slot.take().ok_or(AddrBookError::NotSet(kind))
}

fn or_not_available<T: ToString>(value: Option<&T>) -> String {
    value
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// A free-text note with a set of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    text: String,
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
}

// Persisted form, checked before it becomes a `Note`.
#[derive(Deserialize)]
struct RawNote {
    text: String,
    #[serde(default)]
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RawNote> for Note {
    type Error = FieldError;

    fn try_from(raw: RawNote) -> std::result::Result<Self, Self::Error> {
        let mut note = Note::new_at(&raw.text, raw.created_at)?;
        for tag in raw.tags {
            if !note.tags.contains(&tag) {
                note.tags.push(tag);
            }
        }
        Ok(note)
    }
}

impl Note {
    pub fn new(text: &str) -> std::result::Result<Self, FieldError> {
        Self::new_at(text, Utc::now())
    }

    pub fn new_at(text: &str, created_at: DateTime<Utc>) -> std::result::Result<Self, FieldError> {
        validate_note_text(text)?;
        Ok(Self {
            text: text.to_string(),
            tags: Vec::new(),
            created_at,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == tag)
    }

    pub fn edit_text(&mut self, text: &str) -> std::result::Result<(), FieldError> {
        validate_note_text(text)?;
        self.text = text.to_string();
        Ok(())
    }

    /// Adds a tag; a note never carries the same tag twice.
    pub fn add_tag(&mut self, raw: &str) -> Result<()> {
        let tag = Tag::new(raw)?;
        if self.tags.contains(&tag) {
            return Err(AddrBookError::AlreadyTagged(tag.into_inner()));
        }
        self.tags.push(tag);
        Ok(())
    }

    pub fn remove_tag(&mut self, raw: &str) -> Result<Tag> {
        let pos = self
            .tags
            .iter()
            .position(|t| t.as_str() == raw)
            .ok_or_else(|| AddrBookError::TagNotFound(raw.to_string()))?;
        Ok(self.tags.remove(pos))
    }

    pub fn tags_joined(&self) -> String {
        self.tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn validate_note_text(text: &str) -> std::result::Result<(), FieldError> {
    if text.trim().is_empty() {
        return Err(FieldError::EmptyNoteText);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Record {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("0501234567").unwrap();
        record
    }

    #[test]
    fn new_record_rejects_blank_name() {
        assert!(matches!(
            Record::new(""),
            Err(AddrBookError::Format(FieldError::EmptyName))
        ));
    }

    #[test]
    fn add_phone_validates_and_appends() {
        let mut record = anna();
        record.add_phone("0671112233").unwrap();
        assert_eq!(record.phones().len(), 2);

        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(err, AddrBookError::Format(FieldError::InvalidPhone(_))));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn duplicate_phone_is_permitted() {
        let mut record = anna();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.phones().len(), 2);

        // remove takes the first match only
        record.remove_phone("0501234567").unwrap();
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn remove_missing_phone_is_not_found() {
        let mut record = anna();
        let err = record.remove_phone("0000000000").unwrap_err();
        assert!(matches!(err, AddrBookError::PhoneNotFound(p) if p == "0000000000"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = anna();
        record.add_phone("0671112233").unwrap();
        record.edit_phone("0501234567", "0509999999").unwrap();

        assert!(record.find_phone("0501234567").is_none());
        assert_eq!(record.phones()[0].as_str(), "0509999999");
        assert_eq!(record.phones()[1].as_str(), "0671112233");
    }

    #[test]
    fn edit_phone_unknown_old_leaves_list_unchanged() {
        let mut record = anna();
        let before = record.phones().to_vec();
        let err = record.edit_phone("0000000000", "0509999999").unwrap_err();
        assert!(matches!(err, AddrBookError::PhoneNotFound(_)));
        assert_eq!(record.phones(), before.as_slice());
    }

    #[test]
    fn edit_phone_invalid_new_fails_cleanly() {
        let mut record = anna();
        let err = record.edit_phone("0501234567", "not-a-phone").unwrap_err();
        assert!(matches!(err, AddrBookError::Format(FieldError::InvalidPhone(_))));
        assert!(record.find_phone("0501234567").is_some());
    }

    #[test]
    fn email_lifecycle() {
        let mut record = anna();
        record.add_email("anna@example.com").unwrap();

        let err = record.add_email("other@example.com").unwrap_err();
        assert!(matches!(err, AddrBookError::AlreadySet(FieldKind::Email)));
        assert_eq!(record.email().unwrap().as_str(), "anna@example.com");

        record.remove_email().unwrap();
        assert!(record.email().is_none());
        record.add_email("other@example.com").unwrap();
        assert_eq!(record.email().unwrap().as_str(), "other@example.com");
    }

    #[test]
    fn edit_and_remove_require_a_value() {
        let mut record = anna();
        assert!(matches!(
            record.edit_email("anna@example.com"),
            Err(AddrBookError::NotSet(FieldKind::Email))
        ));
        assert!(matches!(
            record.remove_email(),
            Err(AddrBookError::NotSet(FieldKind::Email))
        ));
        assert!(matches!(
            record.edit_address("Kyiv"),
            Err(AddrBookError::NotSet(FieldKind::Address))
        ));
        assert!(matches!(
            record.remove_address(),
            Err(AddrBookError::NotSet(FieldKind::Address))
        ));
        assert!(matches!(
            record.remove_birthday(),
            Err(AddrBookError::NotSet(FieldKind::Birthday))
        ));
    }

    #[test]
    fn edit_email_revalidates() {
        let mut record = anna();
        record.add_email("anna@example.com").unwrap();
        let err = record.edit_email("broken").unwrap_err();
        assert!(matches!(err, AddrBookError::Format(FieldError::InvalidEmail(_))));
        assert_eq!(record.email().unwrap().as_str(), "anna@example.com");
    }

    #[test]
    fn birthday_is_set_once() {
        let mut record = anna();
        record.add_birthday("15.05.1985").unwrap();
        assert!(matches!(
            record.add_birthday("16.05.1985"),
            Err(AddrBookError::AlreadySet(FieldKind::Birthday))
        ));
        record.edit_birthday("16.05.1985").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "16.05.1985");
    }

    #[test]
    fn invalid_birthday_leaves_slot_empty() {
        let mut record = anna();
        assert!(record.add_birthday("31.02.2000").is_err());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn address_lifecycle() {
        let mut record = anna();
        record.add_address("Kyiv, Khreshchatyk 1").unwrap();
        assert!(matches!(
            record.add_address("Lviv"),
            Err(AddrBookError::AlreadySet(FieldKind::Address))
        ));
        record.edit_address("Lviv, Rynok 5").unwrap();
        assert_eq!(record.address().unwrap().as_str(), "Lviv, Rynok 5");
        assert_eq!(record.remove_address().unwrap().as_str(), "Lviv, Rynok 5");
    }

    #[test]
    fn row_projection() {
        let mut record = anna();
        record.add_phone("0671112233").unwrap();
        assert_eq!(
            record.row(),
            [
                "Anna".to_string(),
                "0501234567; 0671112233".to_string(),
                "N/A".to_string(),
                "N/A".to_string(),
                "N/A".to_string(),
            ]
        );

        record.add_birthday("01.01.1990").unwrap();
        record.add_email("anna@example.com").unwrap();
        let row = record.row();
        assert_eq!(row[2], "01.01.1990");
        assert_eq!(row[3], "anna@example.com");
    }

    #[test]
    fn record_json_roundtrip_skips_empty_fields() {
        let record = anna();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Anna","phones":["0501234567"]}"#);
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_with_invalid_persisted_phone_is_rejected() {
        let json = r#"{"name":"Anna","phones":["123"]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn note_requires_text() {
        assert_eq!(Note::new("").unwrap_err(), FieldError::EmptyNoteText);
        assert_eq!(Note::new("  ").unwrap_err(), FieldError::EmptyNoteText);
        assert_eq!(Note::new("buy milk").unwrap().text(), "buy milk");
    }

    #[test]
    fn note_tags() {
        let mut note = Note::new("call the plumber").unwrap();
        note.add_tag("home").unwrap();
        note.add_tag("urgent").unwrap();
        assert_eq!(note.tags_joined(), "home; urgent");

        let err = note.add_tag("home").unwrap_err();
        assert!(matches!(err, AddrBookError::AlreadyTagged(ref tag) if tag == "home"));

        // case-sensitive
        note.add_tag("Home").unwrap();
        assert!(note.has_tag("Home"));
        assert_eq!(note.tags().len(), 3);

        note.remove_tag("home").unwrap();
        assert!(!note.has_tag("home"));
        assert!(matches!(
            note.remove_tag("home"),
            Err(AddrBookError::TagNotFound(_))
        ));
    }

    #[test]
    fn edit_text_keeps_creation_date() {
        let mut note = Note::new("draft").unwrap();
        let created = note.created_at();
        note.edit_text("final").unwrap();
        assert_eq!(note.text(), "final");
        assert_eq!(note.created_at(), created);
        assert!(note.edit_text("").is_err());
        assert_eq!(note.text(), "final");
    }

    #[test]
    fn persisted_note_drops_duplicate_tags() {
        let json = r#"{"text":"x","tags":["a","b","a"],"created_at":"2024-01-01T10:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.tags_joined(), "a; b");
    }

    #[test]
    fn persisted_note_with_empty_text_is_rejected() {
        let json = r#"{"text":"","tags":[],"created_at":"2024-01-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }
}
