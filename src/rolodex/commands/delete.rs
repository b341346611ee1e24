use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use tracing::debug;

/// Removes the contact stored under exactly `name`. Unknown names are not an error.
pub fn run(book: &mut Directory, name: &str) -> Result<CmdResult> {
    match book.delete(name) {
        Some(record) => {
            debug!(name, "contact deleted");
            Ok(CmdResult::default()
                .with_affected_records(vec![record])
                .with_message(CmdMessage::success(format!("Contact {} deleted.", name))))
        }
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No contact named {}.", name)))),
    }
}
