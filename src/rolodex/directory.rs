//! # Directory
//!
//! The in-memory contact book: records keyed by their exact name, kept in
//! insertion order.
//!
//! Keys are case-sensitive (`Alice` and `alice` may coexist) while [`Directory::find`]
//! is case-insensitive and returns the first match in storage order. Both
//! behaviors are relied upon by existing books and are kept as-is.

use crate::error::{Result, RolodexError};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Snapshot")]
pub struct Directory {
    contacts: Vec<Record>,
}

/// The stored shape of a book, before keys are checked.
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl From<Snapshot> for Directory {
    /// Rebuilds the book through [`Directory::add_record`], so a repeated
    /// name keeps its first position and its last record.
    fn from(snapshot: Snapshot) -> Self {
        let mut book = Directory::new();
        for record in snapshot.contacts {
            if book.contains_key(record.name().as_str()) {
                warn!(name = %record.name(), "duplicate contact in snapshot, keeping the later entry");
            }
            book.add_record(record);
        }
        book
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.contacts.iter()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.key_position(name).is_some()
    }

    /// Inserts `record` under its name, silently replacing an existing entry
    /// in place.
    pub fn add_record(&mut self, record: Record) {
        match self.key_position(record.name().as_str()) {
            Some(pos) => self.contacts[pos] = record,
            None => self.contacts.push(record),
        }
    }

    /// Creates a contact with a single phone.
    ///
    /// Nothing is inserted unless both the name and the phone validate.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<&Record> {
        if self.contains_key(name) {
            return Err(RolodexError::AlreadyExists);
        }
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.contacts.push(record);
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.contacts
            .iter()
            .find(|r| r.name().matches(name))
            .ok_or(RolodexError::ContactNotFound)
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.contacts
            .iter_mut()
            .find(|r| r.name().matches(name))
            .ok_or(RolodexError::ContactNotFound)
    }

    /// Removes the exact key. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.key_position(name).map(|pos| self.contacts.remove(pos))
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        self.find_mut(name)?.edit_phone(old, new)
    }

    pub fn find_phone_owner(&self, number: &str) -> Result<&Record> {
        self.contacts
            .iter()
            .find(|r| r.has_phone(number))
            .ok_or(RolodexError::PhoneNumberNotFound)
    }

    pub fn list_all(&self) -> String {
        self.contacts
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key_position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|r| r.name().as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Directory {
        let mut dir = Directory::new();
        dir.add_contact("Alice", "1234567890").unwrap();
        dir.add_contact("Bob", "5555555555").unwrap();
        dir
    }

    #[test]
    fn add_contact_rejects_existing_name() {
        let mut dir = book();
        let before = dir.clone();
        assert!(matches!(
            dir.add_contact("Alice", "9999999999"),
            Err(RolodexError::AlreadyExists)
        ));
        assert_eq!(dir, before);
    }

    #[test]
    fn add_contact_twice_equals_adding_once() {
        let mut once = Directory::new();
        once.add_contact("Alice", "1234567890").unwrap();

        let mut twice = Directory::new();
        twice.add_contact("Alice", "1234567890").unwrap();
        assert!(twice.add_contact("Alice", "1234567890").is_err());

        assert_eq!(once, twice);
    }

    #[test]
    fn add_contact_with_bad_phone_inserts_nothing() {
        let mut dir = Directory::new();
        assert!(matches!(
            dir.add_contact("Alice", "123"),
            Err(RolodexError::InvalidPhone)
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn add_contact_with_empty_name_fails() {
        let mut dir = Directory::new();
        assert!(matches!(
            dir.add_contact("", "1234567890"),
            Err(RolodexError::EmptyName)
        ));
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut dir = book();
        dir.add_contact("alice", "1111111111").unwrap();
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn find_ignores_case() {
        let dir = book();
        let found = dir.find("alice").unwrap();
        assert_eq!(found, dir.find("Alice").unwrap());
        assert_eq!(found.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn find_returns_first_case_insensitive_match() {
        let mut dir = book();
        dir.add_contact("ALICE", "1111111111").unwrap();
        assert_eq!(dir.find("alice").unwrap().name().as_str(), "Alice");
    }

    #[test]
    fn find_missing_contact_fails() {
        assert!(matches!(
            book().find("Carol"),
            Err(RolodexError::ContactNotFound)
        ));
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut dir = book();
        let mut replacement = Record::new("Alice").unwrap();
        replacement.add_phone("0000000001").unwrap();
        dir.add_record(replacement);

        assert_eq!(dir.len(), 2);
        let first = dir.records().next().unwrap();
        assert_eq!(first.phones[0].as_str(), "0000000001");
    }

    #[test]
    fn delete_missing_name_is_a_noop() {
        let mut dir = book();
        let before = dir.clone();
        assert!(dir.delete("Nobody").is_none());
        assert_eq!(dir, before);
    }

    #[test]
    fn delete_uses_exact_key() {
        let mut dir = book();
        assert!(dir.delete("alice").is_none());
        assert!(dir.delete("Alice").is_some());
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn edit_phone_through_directory() {
        let mut dir = book();
        dir.edit_phone("bob", "5555555555", "6666666666").unwrap();
        assert!(dir.find("Bob").unwrap().has_phone("6666666666"));
    }

    #[test]
    fn edit_phone_reports_missing_contact_and_phone() {
        let mut dir = book();
        assert!(matches!(
            dir.edit_phone("Carol", "5555555555", "6666666666"),
            Err(RolodexError::ContactNotFound)
        ));
        assert!(matches!(
            dir.edit_phone("Bob", "0000000000", "6666666666"),
            Err(RolodexError::PhoneNotFound)
        ));
    }

    #[test]
    fn edit_phone_with_invalid_new_leaves_directory_unchanged() {
        let mut dir = book();
        let before = dir.clone();
        assert!(dir.edit_phone("Bob", "5555555555", "66").is_err());
        assert_eq!(dir, before);
    }

    #[test]
    fn find_phone_owner_scans_all_records() {
        let dir = book();
        assert_eq!(dir.find_phone_owner("5555555555").unwrap().name().as_str(), "Bob");
        assert!(matches!(
            dir.find_phone_owner("0000000000"),
            Err(RolodexError::PhoneNumberNotFound)
        ));
    }

    #[test]
    fn list_all_follows_insertion_order() {
        assert_eq!(
            book().list_all(),
            "Contact name: Alice, phones: 1234567890\nContact name: Bob, phones: 5555555555"
        );
        assert_eq!(Directory::new().list_all(), "");
    }
}
