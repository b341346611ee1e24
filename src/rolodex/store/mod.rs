//! # Storage Layer
//!
//! The contact book lives in memory while a command runs; a [`BookStore`]
//! only loads a snapshot at startup and writes one back after each command.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file
//!   (`addressbook.json` by default)
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "Alice", "phones": ["1234567890"], "birthday": "05.06.1990" }
//!   ]
//! }
//! ```
//!
//! Loading re-runs the field validators. A snapshot that is missing, unreadable
//! or fails validation loads as an empty book; the failure is logged.

use crate::directory::Directory;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the last saved book, or an empty one if there is none.
    fn load(&self) -> Directory;

    /// Persist the whole book, replacing the previous snapshot.
    fn save(&mut self, book: &Directory) -> Result<()>;
}
