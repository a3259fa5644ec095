//! Chart input and output records.

use crate::aspects::AspectRecord;
use crate::chinese::ChineseZodiac;
use crate::ephemeris::Body;
use crate::vedic::VedicChart;
use crate::western::{get_decan_info_from_longitude, get_sign_ruler, Element, HouseRecord};
use crate::zodiac::{decompose, display_longitude, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Birth data as supplied by the caller.
///
/// `hour == -1` marks an unknown birth time. Latitude must lie in [-90, 90]
/// and longitude in [-180, 180]; callers validate coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Local clock hour 0..=23, or [`BirthQuery::UNKNOWN_HOUR`]
    pub hour: i32,
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-form label, echoed back untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Hours east of UTC; may be fractional (5.5 = +05:30)
    pub utc_offset: f64,
}

impl BirthQuery {
    pub const UNKNOWN_HOUR: i32 = -1;

    pub fn is_time_unknown(&self) -> bool {
        self.hour == Self::UNKNOWN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub name: Body,
    /// Tropical longitude, two decimals
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
    pub sign_index: usize,
    /// Whole-sign house, absent when the birth time is unknown
    pub house: Option<u8>,
    pub element: Element,
    pub ruler: Body,
    pub decan: u8,
    pub decan_ruler: Body,
}

impl PlanetPosition {
    pub fn from_longitude(name: Body, longitude: f64, house: Option<u8>) -> Self {
        let placement = decompose(longitude);
        let decan = get_decan_info_from_longitude(display_longitude(longitude));
        Self {
            name,
            longitude: display_longitude(longitude),
            sign: placement.sign(),
            degree: placement.degree,
            sign_index: placement.sign_index,
            house,
            element: decan.element,
            ruler: get_sign_ruler(placement.sign()),
            decan: decan.decan_index,
            decan_ruler: decan.decan_ruler,
        }
    }
}

/// A chart angle (Ascendant, Midheaven, ...) placed in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnglePosition {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub sign_index: usize,
    pub degree: f64,
}

impl AnglePosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let placement = decompose(longitude);
        Self {
            longitude: display_longitude(longitude),
            sign: placement.sign(),
            sign_index: placement.sign_index,
            degree: placement.degree,
        }
    }
}

/// A computed natal chart. Produced once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub birth_data: BirthQuery,
    /// Resolved UTC instant the positions were computed for
    pub instant: DateTime<Utc>,
    pub time_missing: bool,
    pub planets: Vec<PlanetPosition>,
    pub ascendant: Option<AnglePosition>,
    pub midheaven: Option<AnglePosition>,
    pub descendant: Option<AnglePosition>,
    pub imum_coeli: Option<AnglePosition>,
    pub houses: Option<Vec<HouseRecord>>,
    pub aspects: Vec<AspectRecord>,
    pub vedic: VedicChart,
    pub chinese: ChineseZodiac,
}

impl NatalChart {
    pub fn planet(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.name == body)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Aspect between two named points, in either order.
    pub fn aspect_between(&self, a: &str, b: &str) -> Option<&AspectRecord> {
        self.aspects
            .iter()
            .find(|r| (r.planet1 == a && r.planet2 == b) || (r.planet1 == b && r.planet2 == a))
    }
}
