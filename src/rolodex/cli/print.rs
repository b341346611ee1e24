use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Plain => println!("{}", message.content),
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Writes a failed command's message to stderr.
pub(super) fn print_error(message: &CmdMessage) {
    eprintln!("{}", message.content.red());
}
