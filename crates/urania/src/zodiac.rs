//! Angular bookkeeping shared by every chart component.
//!
//! Longitudes are carried at full precision through all computations.
//! Rounding happens only when a value lands in a serialized record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one zodiac sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// The twelve tropical signs in zodiac order, starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Ecliptic longitude where this sign begins.
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize degrees to [0, 360).
///
/// Uses the double-remainder form rather than `rem_euclid`, which can return
/// exactly 360.0 for tiny negative inputs.
pub fn normalize_degrees(value: f64) -> f64 {
    ((value % 360.0) + 360.0) % 360.0
}

/// Normalize hours to [0, 24).
pub fn normalize_hours(value: f64) -> f64 {
    ((value % 24.0) + 24.0) % 24.0
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A longitude split into its sign and the degree within that sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPlacement {
    pub sign_index: usize,
    /// Degree within the sign, rounded to one decimal.
    pub degree: f64,
}

impl SignPlacement {
    pub fn sign(&self) -> ZodiacSign {
        ZodiacSign::from_index(self.sign_index)
    }
}

/// Split a longitude into sign index and in-sign degree.
///
/// Works on [`display_longitude`], so the sign always agrees with the
/// longitude printed next to it.
pub fn decompose(longitude: f64) -> SignPlacement {
    let lon = display_longitude(longitude);
    let sign_index = ((lon / SIGN_SPAN).floor() as usize).min(11);
    SignPlacement {
        sign_index,
        degree: round1(lon % SIGN_SPAN),
    }
}

/// Longitude as it appears in chart output: normalized, two decimals,
/// always in `[0, 360)`.
pub fn display_longitude(longitude: f64) -> f64 {
    let rounded = round2(normalize_degrees(longitude));
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}
