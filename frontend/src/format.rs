//! Display formats for dates and times.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// "Thursday, October 15, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "10/15/2026"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Registration timestamp in the viewer's local time zone.
pub fn local_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Value for an `<input type="date">`.
pub fn date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
