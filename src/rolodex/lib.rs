//! # Rolodex Architecture
//!
//! Rolodex is a small contact book: names, ten digit phone numbers and
//! birthdays, with a report of birthdays close to today. The library holds
//! all of the logic; the `rolodex` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap subcommands and the interactive prompt              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch + API Layer (dispatch.rs, api.rs)                 │
//! │  - Parses prompt lines, maps errors to user text            │
//! │  - Owns the loaded book, saves after each mutation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per command, returns CmdResult messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields.rs, model.rs, directory.rs, birthdays.rs)   │
//! │  - Validated value types, Record, Directory, birthday window│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`fields`]: `Name`, `PhoneNumber`, `Birthday` and their validators
//! - [`model`]: `Record`, a single contact
//! - [`directory`]: `Directory`, the book keyed by name
//! - [`birthdays`]: the upcoming-birthday window
//! - [`commands`]: one module per user command
//! - [`dispatch`]: prompt line parsing and the error-to-text boundary
//! - [`api`]: the facade every UI talks to
//! - [`store`]: persistence
//! - [`config`]: `config.json` settings
//! - [`error`]: error types

pub mod api;
pub mod birthdays;
pub mod commands;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
