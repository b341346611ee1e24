use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

pub fn run(book: &Directory) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts saved.")));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::plain(book.list_all()))
        .with_listed_records(book.records().cloned().collect()))
}
