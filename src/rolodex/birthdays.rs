//! # Upcoming Birthdays
//!
//! A record matches when its birthday, moved into `today`'s year, lies at
//! most `days` away from `today` in either direction. The window is
//! symmetric: a birthday that passed three days ago still shows up in a
//! seven day report. There is no rollover into next year, so on 30 December
//! a 2 January birthday is 363 days away, not 3.

use crate::directory::Directory;
use crate::model::Record;
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Signed distance in days from `today` to the record's birthday this year.
pub fn days_until(record: &Record, today: NaiveDate) -> Option<i64> {
    let birthday = record.birthday?;
    let this_year = birthday.in_year(today.year());
    Some((this_year - today).num_days())
}

/// Records whose birthday falls inside the window, in storage order.
pub fn upcoming_birthdays(book: &Directory, today: NaiveDate, days: u32) -> Vec<&Record> {
    book.records()
        .filter(|record| {
            days_until(record, today).is_some_and(|delta| delta.unsigned_abs() <= u64::from(days))
        })
        .collect()
}
