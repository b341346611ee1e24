//! # Line Dispatcher
//!
//! Turns one line typed at the interactive prompt into an API call.
//!
//! The first whitespace-separated word is the command, the rest are its
//! positional arguments. Extra arguments are ignored; missing ones yield
//! [`RolodexError::MissingArguments`]. [`handle_line`] is the boundary where
//! every failure becomes a message, so the loop never stops on a bad command.

use crate::api::RolodexApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::store::BookStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Blank,
    Hello,
    Exit,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { phone: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    AddPhone { name: String, phone: String },
    RemovePhone { name: String, phone: String },
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Command::Blank);
        };
        let args: Vec<&str> = words.collect();

        let parsed = match command {
            "hello" => Command::Hello,
            "close" | "exit" => Command::Exit,
            "add" => {
                let [name, phone] = take::<2>(&args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = take::<3>(&args)?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [phone] = take::<1>(&args)?;
                Command::Phone { phone }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, date] = take::<2>(&args)?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take::<1>(&args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "delete" => {
                let [name] = take::<1>(&args)?;
                Command::Delete { name }
            }
            "add-phone" => {
                let [name, phone] = take::<2>(&args)?;
                Command::AddPhone { name, phone }
            }
            "remove-phone" => {
                let [name, phone] = take::<2>(&args)?;
                Command::RemovePhone { name, phone }
            }
            other => Command::Unknown(other.to_string()),
        };
        Ok(parsed)
    }
}

/// The first `N` arguments, or `MissingArguments` if there are fewer.
fn take<const N: usize>(args: &[&str]) -> Result<[String; N]> {
    if args.len() < N {
        return Err(RolodexError::MissingArguments);
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

/// Converts a failure into the message shown to the user.
pub fn describe_error(err: &RolodexError) -> CmdMessage {
    if err.is_user_error() {
        CmdMessage::error(err.to_string())
    } else {
        CmdMessage::error(format!("Error: {}", err))
    }
}

/// Parses and runs one line. Failures come back as an error message.
pub fn handle_line<S: BookStore>(api: &mut RolodexApi<S>, line: &str) -> CmdResult {
    match Command::parse(line).and_then(|command| api.execute(command)) {
        Ok(result) => result,
        Err(e) => CmdResult::default().with_message(describe_error(&e)),
    }
}
