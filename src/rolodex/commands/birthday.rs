use crate::birthdays::upcoming_birthdays;
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use chrono::NaiveDate;
use tracing::debug;

pub fn add(book: &mut Directory, name: &str, date: &str) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    record.add_birthday(date)?;
    debug!(name, "birthday set");

    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!("Birthday for {} added.", name))))
}

pub fn show(book: &Directory, name: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    let message = match &record.birthday {
        Some(birthday) => CmdMessage::plain(format!("Birthday for {} - {}.", name, birthday)),
        None => CmdMessage::info(format!("No birthday for {}.", name)),
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_records(vec![record.clone()]))
}

/// Contacts with a birthday within `days` of `today`, one `name - date` line each.
pub fn upcoming(book: &Directory, today: NaiveDate, days: u32) -> Result<CmdResult> {
    let matches = upcoming_birthdays(book, today, days);
    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No upcoming birthdays.")));
    }

    let lines: Vec<String> = matches
        .iter()
        .filter_map(|r| r.birthday.map(|b| format!("{} - {}", r.name(), b)))
        .collect();
    Ok(CmdResult::default()
        .with_message(CmdMessage::plain(lines.join("\n")))
        .with_listed_records(matches.into_iter().cloned().collect()))
}
