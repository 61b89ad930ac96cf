//! # Field Validators
//!
//! Every piece of user text that ends up in a record or a note passes through one
//! of the value types in this module. Construction is the only way in, and it
//! validates: a `Phone` that exists is a valid phone.
//!
//! | Type       | Rule                                                    |
//! |------------|---------------------------------------------------------|
//! | [`Name`]   | not blank                                               |
//! | [`Phone`]  | exactly 10 ASCII digits, no separators                  |
//! | [`Email`]  | `local@domain.tld`, one `@`, no whitespace              |
//! | [`Address`]| not blank                                               |
//! | [`Birthday`]| a real calendar date written `DD.MM.YYYY`              |
//! | [`Tag`]    | not blank                                               |
//!
//! The same constructors run when editing a field and when loading persisted
//! data (the `Deserialize` impls call them), so no path can smuggle an invalid
//! value into a book.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Format used to parse and print birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date regex"));

/// Why a raw string was rejected by a field validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid phone number '{0}': it should be exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid email '{0}': expected something like name@example.com")]
    InvalidEmail(String),

    #[error("Address cannot be empty")]
    EmptyAddress,

    #[error("Invalid date '{0}': use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Tag cannot be empty")]
    EmptyTag,

    #[error("Note text cannot be empty")]
    EmptyNoteText,
}

/// Declares a validated, string-backed field type.
///
/// The generated type serializes as a bare string and re-runs `$validate` on
/// deserialization.
macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident, $validate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
                let raw = raw.into();
                $validate(&raw)?;
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $name::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

string_field!(
    /// A contact's name; the identity key of a record.
    Name,
    validate_name
);
string_field!(
    /// A 10-digit phone number.
    Phone,
    validate_phone
);
string_field!(Email, validate_email);
string_field!(Address, validate_address);
string_field!(
    /// A note label. Matching is exact and case-sensitive.
    Tag,
    validate_tag
);

pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::EmptyName);
    }
    Ok(())
}

pub fn validate_phone(raw: &str) -> Result<(), FieldError> {
    if !PHONE_RE.is_match(raw) {
        return Err(FieldError::InvalidPhone(raw.to_string()));
    }
    Ok(())
}

pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    if !EMAIL_RE.is_match(raw) {
        return Err(FieldError::InvalidEmail(raw.to_string()));
    }
    Ok(())
}

pub fn validate_address(raw: &str) -> Result<(), FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::EmptyAddress);
    }
    Ok(())
}

pub fn validate_tag(raw: &str) -> Result<(), FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::EmptyTag);
    }
    Ok(())
}

/// Parses `DD.MM.YYYY` into a calendar date, rejecting impossible dates.
pub fn parse_birthday(raw: &str) -> Result<NaiveDate, FieldError> {
    if !BIRTHDAY_RE.is_match(raw) {
        return Err(FieldError::InvalidBirthday(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|_| FieldError::InvalidBirthday(raw.to_string()))
}

/// A date of birth. Kept as a date, not text, so anniversary arithmetic is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        parse_birthday(raw).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Birthday::new(&raw).map_err(serde::de::Error::custom)
    }
}
