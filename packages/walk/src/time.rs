//! Modification time conversions.
//!
//! Filesystems store timestamps chrono cannot represent, so every conversion
//! here is checked and falls back to raw epoch seconds.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, Local};

/// Years that fit the fixed-width `YYYY` rendering.
const FORMATTABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Whole seconds and subsecond nanos since the epoch, floored.
fn unix_parts(time: SystemTime) -> (i64, u32) {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (
            i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
            after.subsec_nanos(),
        ),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            match before.subsec_nanos() {
                0 => (-secs, 0),
                nanos => (-secs - 1, 1_000_000_000 - nanos),
            }
        }
    }
}

/// Seconds since the Unix epoch, saturating at the `i64` bounds.
#[must_use]
pub fn unix_seconds(time: SystemTime) -> i64 {
    unix_parts(time).0
}

/// Local time if it has a four-digit year.
#[must_use]
pub fn to_local(time: SystemTime) -> Option<DateTime<Local>> {
    let (secs, nanos) = unix_parts(time);
    DateTime::from_timestamp(secs, nanos)
        .filter(|utc| FORMATTABLE_YEARS.contains(&utc.year()))
        .map(|utc| utc.with_timezone(&Local))
}

/// Local time as `YYYY-MM-DD HH:MM:SS`, or the epoch seconds when the
/// time is out of range.
#[must_use]
pub fn format_local(time: SystemTime) -> String {
    to_local(time).map_or_else(
        || unix_seconds(time).to_string(),
        |local| local.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}
