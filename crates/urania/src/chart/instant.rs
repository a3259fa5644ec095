//! Birth query to UTC instant.

use crate::chart::types::BirthQuery;
use crate::error::ChartError;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Clock time substituted when the birth hour is unknown.
pub const DEFAULT_HOUR: i32 = 12;
pub const DEFAULT_MINUTE: u32 = 0;

/// Largest accepted UTC offset magnitude, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInstant {
    pub utc: DateTime<Utc>,
    /// True when the noon default stood in for an unknown birth time
    pub time_missing: bool,
}

/// Resolve the birth query into an absolute UTC instant.
///
/// UTC is `local clock - utc_offset` on the given calendar date; the shift
/// may cross a day, month or year boundary. Fractional offsets are applied
/// to the second.
pub fn resolve_instant(query: &BirthQuery) -> Result<ResolvedInstant, ChartError> {
    let invalid = |message: &str| ChartError::InvalidInstant {
        year: query.year,
        month: query.month,
        day: query.day,
        hour: query.hour,
        minute: query.minute,
        utc_offset: query.utc_offset,
        message: message.to_string(),
    };

    let time_missing = query.is_time_unknown();
    let (hour, minute) = if time_missing {
        (DEFAULT_HOUR, DEFAULT_MINUTE)
    } else {
        (query.hour, query.minute)
    };

    if !(0..=23).contains(&hour) {
        return Err(invalid("hour must be 0..=23, or -1 when unknown"));
    }
    if minute > 59 {
        return Err(invalid("minute must be 0..=59"));
    }
    if !query.utc_offset.is_finite() || query.utc_offset.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(invalid("UTC offset must be a finite number of hours within ±24"));
    }

    let midnight = NaiveDate::from_ymd_opt(query.year, query.month, query.day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| invalid("calendar date does not exist"))?;

    let shift_seconds = ((f64::from(hour) - query.utc_offset) * 3600.0).round() as i64
        + i64::from(minute) * 60;
    let naive_utc = midnight
        .checked_add_signed(Duration::seconds(shift_seconds))
        .ok_or_else(|| invalid("instant is outside the representable range"))?;

    let utc = Utc.from_utc_datetime(&naive_utc);
    log::debug!("Resolved birth instant {utc} (time missing: {time_missing})");
    Ok(ResolvedInstant { utc, time_missing })
}
