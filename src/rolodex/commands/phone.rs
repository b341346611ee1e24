use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

/// Looks up the contact that owns `number`.
pub fn run(book: &Directory, number: &str) -> Result<CmdResult> {
    let record = book.find_phone_owner(number)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::plain(record.to_string()))
        .with_listed_records(vec![record.clone()]))
}
