use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Settings stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// File name (or absolute path) of the address book
    #[serde(default = "default_book_file")]
    pub book_file: String,

    /// Window used by `birthdays`, in days either side of today
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

fn default_upcoming_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

/// Keys understood by `rolodex config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BookFile,
    UpcomingDays,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::BookFile, ConfigKey::UpcomingDays];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::BookFile => "book-file",
            ConfigKey::UpcomingDays => "upcoming-days",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == key)
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(RolodexError::Io)?;
        Ok(())
    }

    /// Absolute book paths are used as-is, relative ones live in `data_dir`.
    pub fn book_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.book_file)
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::BookFile => self.book_file.clone(),
            ConfigKey::UpcomingDays => self.upcoming_days.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::BookFile => {
                if value.is_empty() {
                    return Err(RolodexError::Config("book-file cannot be empty".into()));
                }
                self.book_file = value.to_string();
            }
            ConfigKey::UpcomingDays => {
                self.upcoming_days = value.parse().map_err(|_| {
                    RolodexError::Config(format!("upcoming-days must be a whole number, got {}", value))
                })?;
            }
        }
        Ok(())
    }
}
