//! ISO-8601 week keys (`YYYY/WW`) used to bucket records.

use crate::errors::{AppError, AppResult};
use crate::utils::date::from_timestamp_in;
use chrono::{Datelike, Local, TimeZone};

/// Week key of a POSIX timestamp, using the local calendar date.
pub fn week_key(timestamp: i64) -> AppResult<String> {
    week_key_in(timestamp, &Local)
}

/// Week key of a POSIX timestamp, using the calendar date in `tz`.
///
/// The year is the ISO week-year, zero-padded to four digits so keys
/// sort chronologically: 2021-01-01 is `2020/53`, 2019-12-30 is `2020/01`.
pub fn week_key_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> AppResult<String> {
    let dt = from_timestamp_in(timestamp, tz).ok_or_else(|| AppError::MalformedRecord {
        line: 0,
        reason: format!("timestamp {timestamp} out of range"),
    })?;

    let week = dt.date_naive().iso_week();
    Ok(format!("{:04}/{:02}", week.year(), week.week()))
}
