use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use tracing::debug;

pub fn run(book: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.add_contact(name, phone)?.clone();
    debug!(name, "contact added");

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success(format!(
            "Contact {} with phone {} added.",
            name, phone
        ))))
}
