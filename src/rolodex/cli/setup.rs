use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Contact book with birthday reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this address book file instead of the configured one
    #[arg(short, long, global = true)]
    pub book: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive assistant (default)
    Repl,

    /// Add a new contact with one phone
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Find the contact that owns a phone number
    Phone { phone: String },

    /// List every contact
    #[command(alias = "ls")]
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday { name: String, date: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays close to today
    Birthdays {
        /// Window in days either side of today (defaults to upcoming-days)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Remove a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Add another phone to an existing contact
    AddPhone { name: String, phone: String },

    /// Remove a phone from a contact
    RemovePhone { name: String, phone: String },

    /// Get or set configuration
    Config {
        /// Configuration key (book-file, upcoming-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
