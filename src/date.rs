//! Calendar-day helpers: epoch seconds to local dates, and the ISO day
//! string used in snapshot filenames.

use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Resolve the process-local UTC offset once at startup.
/// Falls back to UTC when the platform cannot report it (the `time` crate
/// refuses local-offset lookups in some multi-threaded environments).
pub fn detect_local_offset() -> UtcOffset {
    match UtcOffset::current_local_offset() {
        Ok(off) => off,
        Err(_) => {
            tracing::warn!("local UTC offset indeterminate; falling back to UTC");
            UtcOffset::UTC
        }
    }
}

/// Calendar date of a unix timestamp, as seen from `offset`.
/// Timestamps out of `time`'s supported range map to the unix epoch.
pub fn local_date_from_epoch(ts: i64, offset: UtcOffset) -> Date {
    let dt = OffsetDateTime::from_unix_timestamp(ts).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    dt.to_offset(offset).date()
}

/// Today's calendar date, as seen from `offset`.
pub fn today_local(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// `YYYY-MM-DD` rendering for filenames.
pub fn iso_day(date: Date) -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    // The format description is static and infallible for a valid Date.
    date.format(&fmt).unwrap_or_else(|_| format!("{date}"))
}
