use super::print::print_messages;
use rolodex::api::RolodexApi;
use rolodex::dispatch::{describe_error, handle_line};
use rolodex::error::{Result, RolodexError};
use rolodex::store::BookStore;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter a command: ";

/// Reads commands from stdin until `close`/`exit` or end of input.
///
/// Lines are read as bytes; anything that is not UTF-8 is replaced rather
/// than ending the session.
pub(super) fn run<S: BookStore>(api: &mut RolodexApi<S>) -> Result<()> {
    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                print_messages(&[describe_error(&RolodexError::Io(e))]);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let result = handle_line(api, line.trim_end_matches(['\n', '\r']));
        print_messages(&result.messages);
        if result.exit {
            break;
        }
    }

    api.save()
}
