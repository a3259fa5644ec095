//! Vedic (sidereal) chart records.

use crate::vedic::ayanamsa::sidereal_longitude;
use crate::vedic::nakshatra::get_nakshatra_for_longitude;
use crate::zodiac::{decompose, display_longitude};
use serde::{Deserialize, Serialize};

/// Sidereal sign names (rashis), Mesha at 0°.
pub const VEDIC_SIGNS: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrishchika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicPosition {
    pub name: String,
    /// Sidereal longitude, two decimals
    pub longitude: f64,
    pub sign: String,
    pub sign_index: usize,
    pub degree: f64,
    pub nakshatra: String,
    pub nakshatra_lord: String,
    pub pada: u8,
}

impl VedicPosition {
    /// Reproject a tropical longitude onto the sidereal zodiac.
    pub fn from_tropical(name: &str, tropical_longitude: f64, ayanamsa: f64) -> Self {
        let sidereal = sidereal_longitude(tropical_longitude, ayanamsa);
        let placement = decompose(sidereal);
        let nakshatra = get_nakshatra_for_longitude(display_longitude(sidereal));
        Self {
            name: name.to_string(),
            longitude: display_longitude(sidereal),
            sign: VEDIC_SIGNS[placement.sign_index].to_string(),
            sign_index: placement.sign_index,
            degree: placement.degree,
            nakshatra: nakshatra.record.name.to_string(),
            nakshatra_lord: nakshatra.record.lord.to_string(),
            pada: nakshatra.pada,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicChart {
    /// Ayanamsa applied, degrees
    pub ayanamsa: f64,
    pub planets: Vec<VedicPosition>,
    pub ascendant: Option<VedicPosition>,
}
