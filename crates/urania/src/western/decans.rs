//! Western astrology decans calculations.
//!
//! Each sign is divided into 3 decans (10 degrees each), with decan rulers based on element groups.

use crate::ephemeris::Body;
use crate::western::rulers::get_sign_ruler;
use crate::zodiac::{normalize_degrees, ZodiacSign, SIGN_SPAN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Elements cycle Fire, Earth, Air, Water from Aries onward.
    pub fn of_sign(sign: ZodiacSign) -> Self {
        match sign.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecanInfo {
    pub sign: ZodiacSign,
    pub element: Element,
    #[serde(rename = "signRuler")]
    pub sign_ruler: Body,
    #[serde(rename = "decanIndex")]
    pub decan_index: u8, // 1, 2, or 3
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64, // 0 <= x < 30
    #[serde(rename = "decanRuler")]
    pub decan_ruler: Body,
}

/// Given degree in sign (0–29.999...), returns decan index 1, 2, or 3.
///
/// Values outside [0, 30) are clamped into the first or last decan.
pub fn get_decan_index(degree_in_sign: f64) -> u8 {
    if degree_in_sign < 10.0 {
        1
    } else if degree_in_sign < 20.0 {
        2
    } else {
        3
    }
}

/// Compute decan info given a sign and degree in that sign.
pub fn get_decan_info_for_sign_and_degree(sign: ZodiacSign, degree_in_sign: f64) -> DecanInfo {
    let decan_index = get_decan_index(degree_in_sign);

    // The element group of a sign is {s, s + 4, s + 8} in zodiac order;
    // successive decans hand rulership to the next sign of the group.
    let ruling_sign = ZodiacSign::from_index(sign.index() + 4 * (decan_index as usize - 1));

    DecanInfo {
        sign,
        element: Element::of_sign(sign),
        sign_ruler: get_sign_ruler(sign),
        decan_index,
        degree_in_sign,
        decan_ruler: get_sign_ruler(ruling_sign),
    }
}

/// Decan info from absolute longitude.
pub fn get_decan_info_from_longitude(longitude: f64) -> DecanInfo {
    let lon = normalize_degrees(longitude);
    let sign_index = ((lon / SIGN_SPAN) as usize).min(11);
    let degree_in_sign = lon - (sign_index as f64 * SIGN_SPAN);
    get_decan_info_for_sign_and_degree(ZodiacSign::from_index(sign_index), degree_in_sign)
}
