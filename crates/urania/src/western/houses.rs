//! Whole-sign houses.
//!
//! Each house is one full sign, starting with the sign holding the Ascendant.
//! The twelve houses therefore tile [0, 360) in exact 30° arcs.

use crate::zodiac::{normalize_degrees, ZodiacSign, SIGN_SPAN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    /// House number, 1..=12
    pub house: u8,
    pub sign: ZodiacSign,
    /// Longitude where the house begins (sign index × 30)
    #[serde(rename = "startDegree")]
    pub start_degree: f64,
}

impl HouseRecord {
    /// Whether `longitude` falls in `[start_degree, start_degree + 30)`,
    /// measured across the 360°/0° seam.
    pub fn contains(&self, longitude: f64) -> bool {
        normalize_degrees(longitude - self.start_degree) < SIGN_SPAN
    }
}

/// Build the twelve whole-sign houses for an Ascendant in `ascendant_sign_index`.
pub fn whole_sign_houses(ascendant_sign_index: usize) -> Vec<HouseRecord> {
    (0..12)
        .map(|i| {
            let sign = ZodiacSign::from_index(ascendant_sign_index + i);
            HouseRecord {
                house: i as u8 + 1,
                sign,
                start_degree: sign.start_degree(),
            }
        })
        .collect()
}

/// House number holding `longitude`.
///
/// The houses partition the circle, so a miss means the house table itself
/// is malformed. Debug builds assert; release builds log and fall back to
/// house 1.
pub fn house_of(longitude: f64, houses: &[HouseRecord]) -> u8 {
    let lon = normalize_degrees(longitude);
    if let Some(record) = houses.iter().find(|h| h.contains(lon)) {
        return record.house;
    }
    log::warn!(
        "No house contains longitude {lon}; house table has {} entries",
        houses.len()
    );
    debug_assert!(false, "house table does not cover longitude {lon}");
    1
}
