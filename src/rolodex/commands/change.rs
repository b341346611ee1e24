use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use tracing::debug;

/// Replaces `old` with `new` on the contact found by `name` (case-insensitive).
pub fn run(book: &mut Directory, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    book.edit_phone(name, old, new)?;
    debug!(name, "phone changed");

    let record = book.find(name)?.clone();
    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success(format!(
            "Phone for {} changed from {} to {}.",
            name, old, new
        ))))
}
