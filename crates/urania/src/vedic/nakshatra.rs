//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::zodiac::normalize_degrees;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (display_name, planetary lord)
pub const NAKSHATRA_ORDER: [(&str, &str); 27] = [
    ("Ashwini", "Ketu"),
    ("Bharani", "Venus"),
    ("Krittika", "Sun"),
    ("Rohini", "Moon"),
    ("Mrigashira", "Mars"),
    ("Ardra", "Rahu"),
    ("Punarvasu", "Jupiter"),
    ("Pushya", "Saturn"),
    ("Ashlesha", "Mercury"),
    ("Magha", "Ketu"),
    ("Purva Phalguni", "Venus"),
    ("Uttara Phalguni", "Sun"),
    ("Hasta", "Moon"),
    ("Chitra", "Mars"),
    ("Swati", "Rahu"),
    ("Vishakha", "Jupiter"),
    ("Anuradha", "Saturn"),
    ("Jyeshtha", "Mercury"),
    ("Mula", "Ketu"),
    ("Purva Ashadha", "Venus"),
    ("Uttara Ashadha", "Sun"),
    ("Shravana", "Moon"),
    ("Dhanishta", "Mars"),
    ("Shatabhisha", "Rahu"),
    ("Purva Bhadrapada", "Jupiter"),
    ("Uttara Bhadrapada", "Saturn"),
    ("Revati", "Mercury"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraRecord {
    pub name: &'static str,
    pub lord: &'static str,
    pub start: f64,
    pub end: f64,
    pub index: usize,
}

/// Where a sidereal longitude falls among the nakshatras.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraPlacement {
    pub record: &'static NakshatraRecord,
    /// Degrees past the start of the nakshatra
    pub offset: f64,
    /// Pada 1..=4
    pub pada: u8,
    /// Fraction of the current pada already traversed
    pub pada_fraction: f64,
}

fn build_nakshatra_table() -> Vec<NakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, &(name, lord))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            NakshatraRecord {
                name,
                lord,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
                index: idx,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<NakshatraRecord> = build_nakshatra_table();
}

/// Return the nakshatra containing the given sidereal longitude.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let index = (lon / NAKSHATRA_SEGMENT_SIZE) as usize % NAKSHATRA_TABLE.len();
    let record = &NAKSHATRA_TABLE[index];

    let offset = lon - record.start;
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;
    let pada_offset = offset - f64::from(pada - 1) * PADA_SIZE;

    NakshatraPlacement {
        record,
        offset,
        pada,
        pada_fraction: pada_offset / PADA_SIZE,
    }
}
