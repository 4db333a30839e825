//! UTC timestamp reconstruction for both GPS payload formats.
//!
//! Both decoders need only wall-clock arithmetic in UTC; there is no
//! dependency on a time zone database.

use log::warn;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::constants::GPMF_EPOCH;

/// Parse a `GPSU` string of the form `yymmddhhmmss` optionally followed by
/// `.` and up to three fractional-second digits. Returns `None` if the
/// string doesn't match that shape or names an invalid calendar date.
pub fn parse_gpsu(raw: &str) -> Option<OffsetDateTime> {
    let (main, frac) = raw.split_once('.').unwrap_or((raw, ""));
    if main.len() != 12 || !main.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac.is_empty() && !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let yy: i32 = main[0..2].parse().ok()?;
    let month: u8 = main[2..4].parse().ok()?;
    let day: u8 = main[4..6].parse().ok()?;
    let hour: u8 = main[6..8].parse().ok()?;
    let minute: u8 = main[8..10].parse().ok()?;
    let second: u8 = main[10..12].parse().ok()?;

    let mut frac_digits: String = frac.chars().take(3).collect();
    while frac_digits.len() < 3 {
        frac_digits.push('0');
    }
    let millis: u16 = frac_digits.parse().ok()?;

    let date = Date::from_calendar_date(2000 + yy, Month::try_from(month).ok()?, day).ok()?;
    let time = Time::from_hms_milli(hour, minute, second, millis).ok()?;
    Some(PrimitiveDateTime::new(date, time).assume_utc())
}

/// Base time for a GPS5 cluster: the parsed `GPSU`, or - with a logged
/// warning - the current UTC wall clock when `GPSU` is absent or
/// unparseable.
pub fn base_time(gpsu: Option<&str>) -> OffsetDateTime {
    match gpsu.and_then(parse_gpsu) {
        Some(t) => t,
        None => {
            warn!("GPSU missing or unparseable ({gpsu:?}), falling back to current UTC time");
            OffsetDateTime::now_utc()
        }
    }
}

/// GPS9 per-sample timestamp: the GPMF epoch plus whole days plus
/// millisecond-resolution seconds within the day.
pub fn gps9_timestamp(days: u16, secs_scaled: f64) -> OffsetDateTime {
    let millis = (secs_scaled * 1000.0).floor() as i64;
    GPMF_EPOCH + Duration::days(days as i64) + Duration::milliseconds(millis)
}
