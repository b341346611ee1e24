use crate::error::{Result, RolodexError};
use crate::fields::{validate_birthday, validate_name, validate_phone, Birthday, Name, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: validate_name(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The key this record is stored under. It is fixed at creation.
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        let phone = validate_phone(number)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, number: &str) -> Result<PhoneNumber> {
        let pos = self.position_of(number)?;
        Ok(self.phones.remove(pos))
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the record is touched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = validate_phone(new)?;
        let pos = self.position_of(old)?;
        self.phones[pos] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Result<&PhoneNumber> {
        self.phones
            .iter()
            .find(|p| p.as_str() == number)
            .ok_or(RolodexError::PhoneNotFound)
    }

    pub fn has_phone(&self, number: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == number)
    }

    pub fn add_birthday(&mut self, date: &str) -> Result<()> {
        self.birthday = Some(validate_birthday(date)?);
        Ok(())
    }

    fn position_of(&self, number: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == number)
            .ok_or(RolodexError::PhoneNotFound)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
