//! Extra phones on an existing contact.

use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use tracing::debug;

pub fn add(book: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    record.add_phone(phone)?;
    debug!(name, "phone added");

    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone {} added to {}.",
            phone, name
        ))))
}

pub fn remove(book: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    record.remove_phone(phone)?;
    debug!(name, "phone removed");

    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone {} removed from {}.",
            phone, name
        ))))
}
