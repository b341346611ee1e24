//! Field value objects for contacts.
//!
//! Each field type can only be built through its validator, so a `Name`,
//! `PhoneNumber` or `Birthday` held anywhere in the crate is known to be
//! well formed. Deserialization goes through the same validators.
//!
//! Formats:
//! - name: any non-empty string
//! - phone: exactly 10 ASCII digits, no separators or country code
//! - birthday: `DD.MM.YYYY`, zero-padded, and a real calendar date

use crate::error::{Result, RolodexError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
const PHONE_LEN: usize = 10;

/// Validates a contact name.
///
/// ```
/// use rolodex::fields::validate_name;
///
/// assert!(validate_name("Alice").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(s: &str) -> Result<Name> {
    if s.is_empty() {
        return Err(RolodexError::EmptyName);
    }
    Ok(Name(s.to_string()))
}

/// Validates a phone number: exactly ten ASCII digits.
///
/// ```
/// use rolodex::fields::validate_phone;
///
/// assert!(validate_phone("0501234567").is_ok());
/// assert!(validate_phone("050-123-45").is_err());
/// assert!(validate_phone("123").is_err());
/// ```
pub fn validate_phone(s: &str) -> Result<PhoneNumber> {
    if s.len() != PHONE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RolodexError::InvalidPhone);
    }
    Ok(PhoneNumber(s.to_string()))
}

/// Validates a birthday written as `DD.MM.YYYY`.
///
/// The shape is checked before parsing so that non-canonical spellings
/// like `1.6.2024` are rejected instead of silently normalized.
pub fn validate_birthday(s: &str) -> Result<Birthday> {
    if !is_canonical_date(s) {
        return Err(RolodexError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(Birthday)
        .map_err(|_| RolodexError::InvalidDateFormat)
}

fn is_canonical_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used by directory lookups.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's anniversary in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

// Serde: every field is stored as its plain text form and re-validated on load.

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        validate_name(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        validate_phone(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        validate_birthday(&s).map_err(serde::de::Error::custom)
    }
}
