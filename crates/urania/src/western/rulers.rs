//! Sign rulers for Western astrology.
//!
//! Traditional rulerships only: every sign is ruled by one of the seven
//! visible bodies the chart already tracks.

use crate::ephemeris::Body;
use crate::zodiac::{decompose, ZodiacSign};

const TRADITIONAL_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius
    Body::Jupiter, // Pisces
];

/// Get sign ruler (traditional rulership)
pub fn get_sign_ruler(sign: ZodiacSign) -> Body {
    TRADITIONAL_RULERS[sign.index()]
}

/// Get sign ruler from longitude
pub fn get_sign_ruler_from_longitude(longitude: f64) -> Body {
    get_sign_ruler(decompose(longitude).sign())
}
