//! # API Facade
//!
//! [`RolodexApi`] owns the loaded book and the store it came from. Every UI
//! (the one-shot subcommands, the interactive loop, tests) goes through it.
//!
//! The facade:
//! - **Dispatches** to `commands/*.rs`, which hold the logic
//! - **Persists** the book after every successful mutation, rolling the
//!   change back when the save fails
//! - **Supplies today's date** to the birthday report
//!
//! It never prints. Results come back as [`CmdResult`] values whose messages
//! are ready to show.
//!
//! `RolodexApi<S: BookStore>` is generic over storage: `FileStore` in
//! production, `InMemoryStore` in tests.

use crate::commands;
use crate::directory::Directory;
use crate::dispatch::Command;
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct RolodexApi<S: BookStore> {
    store: S,
    book: Directory,
    data_dir: PathBuf,
    upcoming_days: u32,
}

impl<S: BookStore> RolodexApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S, data_dir: impl Into<PathBuf>, upcoming_days: u32) -> Self {
        let book = store.load();
        info!(contacts = book.len(), "address book opened");
        Self {
            store,
            book,
            data_dir: data_dir.into(),
            upcoming_days,
        }
    }

    pub fn book(&self) -> &Directory {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    /// Runs a mutating command and saves the result.
    ///
    /// Nothing is saved when the command touched no record. If the save
    /// fails, the book is restored to its state before the command.
    fn commit<F>(&mut self, command: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut Directory) -> Result<commands::CmdResult>,
    {
        let before = self.book.clone();
        let result = command(&mut self.book)?;
        if result.affected_records.is_empty() {
            return Ok(result);
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "save failed, change rolled back");
            self.book = before;
            return Err(e);
        }
        Ok(result)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        self.commit(|book| commands::add::run(book, name, phone))
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        self.commit(|book| commands::change::run(book, name, old, new))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        self.commit(|book| commands::phones::add(book, name, phone))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        self.commit(|book| commands::phones::remove(book, name, phone))
    }

    pub fn find_phone_owner(&self, phone: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, phone)
    }

    pub fn all_contacts(&self) -> Result<commands::CmdResult> {
        commands::all::run(&self.book)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        self.commit(|book| commands::delete::run(book, name))
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        self.commit(|book| commands::birthday::add(book, name, date))
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Birthdays around today using the configured window.
    pub fn birthdays(&self) -> Result<commands::CmdResult> {
        self.birthdays_on(Local::now().date_naive(), self.upcoming_days)
    }

    pub fn birthdays_on(&self, today: NaiveDate, days: u32) -> Result<commands::CmdResult> {
        commands::birthday::upcoming(&self.book, today, days)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// Runs a command parsed from the interactive prompt.
    pub fn execute(&mut self, command: Command) -> Result<CmdResult> {
        match command {
            Command::Blank => {
                Ok(CmdResult::default().with_message(CmdMessage::warning("Please enter a command.")))
            }
            Command::Hello => {
                Ok(CmdResult::default().with_message(CmdMessage::plain("How can I help you?")))
            }
            Command::Exit => {
                let mut result = CmdResult::default().with_message(CmdMessage::plain("Good bye!"));
                result.exit = true;
                Ok(result)
            }
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change { name, old, new } => self.change_phone(&name, &old, &new),
            Command::Phone { phone } => self.find_phone_owner(&phone),
            Command::All => self.all_contacts(),
            Command::AddBirthday { name, date } => self.add_birthday(&name, &date),
            Command::ShowBirthday { name } => self.show_birthday(&name),
            Command::Birthdays => self.birthdays(),
            Command::Delete { name } => self.delete_contact(&name),
            Command::AddPhone { name, phone } => self.add_phone(&name, &phone),
            Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone),
            Command::Unknown(_) => {
                Ok(CmdResult::default().with_message(CmdMessage::error("Invalid command.")))
            }
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
