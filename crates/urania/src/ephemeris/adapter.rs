use crate::ephemeris::types::Body;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Ephemeris does not provide body: {0}")]
    UnknownBody(Body),
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("Ephemeris returned a non-finite {quantity}")]
    NonFinite { quantity: String },
}

/// Source of raw positions for the chart engine.
///
/// Implementations are treated as pure functions of their inputs: the same
/// body and instant must always produce the same answer. Nothing behind this
/// seam is assumed about the numerical method used.
pub trait Ephemeris {
    /// Geocentric ecliptic longitude of `body` at `instant`, in degrees.
    ///
    /// The value need not be normalized; callers reduce it to [0, 360).
    fn longitude_of(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Greenwich sidereal time at `instant`, in hours.
    fn sidereal_time_at(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn longitude_of(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).longitude_of(body, instant)
    }

    fn sidereal_time_at(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).sidereal_time_at(instant)
    }
}
