use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Formati accettati per le date dei contratti, in ordine di prova.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an ISO date or datetime (`YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// or plain `YYYY-MM-DD`, meaning midnight).
pub fn parse_iso_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// ISO datetime interpreted in the given time zone → POSIX timestamp.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant;
/// non-existent ones (DST gap) are rejected.
pub fn iso_to_timestamp_in<Tz: TimeZone>(s: &str, tz: &Tz) -> AppResult<i64> {
    let naive = parse_iso_datetime(s)?;
    naive
        .and_local_timezone(tz.clone())
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| AppError::InvalidDate(format!("{s} does not exist in local time")))
}

/// ISO datetime in local time → POSIX timestamp.
pub fn iso_to_timestamp(s: &str) -> AppResult<i64> {
    iso_to_timestamp_in(s, &Local)
}

/// POSIX timestamp → datetime in the given zone, `None` if out of range.
pub fn from_timestamp_in<Tz: TimeZone>(ts: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(tz))
}

/// Human readable local datetime for a timestamp (used in messages).
pub fn format_timestamp(ts: i64) -> String {
    from_timestamp_in(ts, &Local)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
