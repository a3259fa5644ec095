//! Tropical to sidereal reprojection.
//!
//! The ayanamsa here is a straight-line fit to Lahiri around 2024: 24.1° at
//! the reference year, drifting 0.0139° per year. It ignores nutation and
//! the curvature of precession, so it is only trustworthy within roughly a
//! century of the reference year (about 1900–2100).

use crate::zodiac::normalize_degrees;

pub const REFERENCE_YEAR: i32 = 2024;

/// Lahiri ayanamsa at the reference year, degrees.
pub const AYANAMSA_AT_REFERENCE: f64 = 24.1;

/// Annual increase of the ayanamsa, degrees per year.
pub const ANNUAL_DRIFT: f64 = 0.0139;

/// Linear Lahiri ayanamsa for a calendar year.
pub fn linear_lahiri_ayanamsa(year: i32) -> f64 {
    AYANAMSA_AT_REFERENCE + (f64::from(year) - f64::from(REFERENCE_YEAR)) * ANNUAL_DRIFT
}

/// Sidereal longitude in [0, 360).
pub fn sidereal_longitude(tropical_longitude: f64, ayanamsa: f64) -> f64 {
    normalize_degrees(tropical_longitude - ayanamsa)
}
