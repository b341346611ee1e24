use super::BookStore;
use crate::directory::Directory;
use crate::error::{Result, RolodexError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Directory> {
        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        if content.trim().is_empty() {
            return Ok(Directory::new());
        }
        serde_json::from_str(&content).map_err(RolodexError::Serialization)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RolodexError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Directory {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no address book yet, starting empty");
            return Directory::new();
        }
        match self.read() {
            Ok(book) => {
                debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
                book
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read address book, starting empty");
                Directory::new()
            }
        }
    }

    fn save(&mut self, book: &Directory) -> Result<()> {
        self.ensure_parent()?;

        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;
        fs::write(&tmp, content).map_err(RolodexError::Io)?;
        fs::rename(&tmp, &self.path).map_err(RolodexError::Io)?;

        debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
