use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors surfaced by chart computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error("Invalid birth instant {year:04}-{month:02}-{day:02} {hour:02}:{minute:02} (UTC offset {utc_offset}): {message}")]
    InvalidInstant {
        year: i32,
        month: u32,
        day: u32,
        hour: i32,
        minute: u32,
        utc_offset: f64,
        message: String,
    },
    #[error("Ascendant is undefined at latitude {latitude}; house and angle computation needs |latitude| < 90")]
    PolarLatitude { latitude: f64 },
}
