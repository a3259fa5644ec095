use crate::aspects::AspectCalculator;
use crate::chart::instant::resolve_instant;
use crate::chart::types::{AnglePosition, BirthQuery, NatalChart, PlanetPosition};
use crate::chinese::chinese_zodiac;
#[cfg(not(feature = "swisseph"))]
use crate::ephemeris::MeanElementsEphemeris;
#[cfg(feature = "swisseph")]
use crate::ephemeris::SwissEphemerisAdapter;
use crate::ephemeris::{Body, Ephemeris, EphemerisError, GeoLocation};
use crate::error::ChartError;
use crate::vedic::{linear_lahiri_ayanamsa, VedicChart, VedicPosition};
use crate::western::{compute_angles, house_of, is_polar, whole_sign_houses};
use crate::zodiac::{decompose, display_longitude, normalize_degrees};

/// Label used for the Ascendant in aspect and Vedic records.
pub const ASCENDANT_LABEL: &str = "Ascendant";

/// Compute a natal chart with the Swiss Ephemeris in Moshier mode.
#[cfg(feature = "swisseph")]
pub fn compute_natal_chart(query: &BirthQuery) -> Result<NatalChart, ChartError> {
    compute_natal_chart_with(query, &SwissEphemerisAdapter::moshier())
}

/// Compute a natal chart with the mean-elements fallback ephemeris.
#[cfg(not(feature = "swisseph"))]
pub fn compute_natal_chart(query: &BirthQuery) -> Result<NatalChart, ChartError> {
    compute_natal_chart_with(query, &MeanElementsEphemeris::new())
}

/// Compute a natal chart against any ephemeris.
///
/// Deterministic: the same query and the same ephemeris answers produce the
/// same chart.
pub fn compute_natal_chart_with<E: Ephemeris + ?Sized>(
    query: &BirthQuery,
    ephemeris: &E,
) -> Result<NatalChart, ChartError> {
    let resolved = resolve_instant(query)?;
    let instant = resolved.utc;
    let time_missing = resolved.time_missing;

    if !time_missing && is_polar(query.latitude) {
        return Err(ChartError::PolarLatitude {
            latitude: query.latitude,
        });
    }

    let mut longitudes = Vec::with_capacity(Body::ALL.len());
    for body in Body::ALL {
        let raw = ephemeris.longitude_of(body, instant)?;
        if !raw.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: format!("longitude for {body}"),
            }
            .into());
        }
        longitudes.push((body, normalize_degrees(raw)));
    }

    let angles = if time_missing {
        None
    } else {
        let gst = ephemeris.sidereal_time_at(instant)?;
        if !gst.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: "sidereal time".to_string(),
            }
            .into());
        }
        let location = GeoLocation {
            lat: query.latitude,
            lon: query.longitude,
        };
        let angles = compute_angles(gst, &location);
        log::debug!(
            "GST {gst:.4}h: ascendant {:.2}, midheaven {:.2}",
            angles.ascendant,
            angles.midheaven
        );
        Some(angles)
    };

    let houses = angles.map(|a| whole_sign_houses(decompose(a.ascendant).sign_index));

    let planets: Vec<PlanetPosition> = longitudes
        .iter()
        .map(|&(body, lon)| {
            let house = houses
                .as_deref()
                .map(|h| house_of(display_longitude(lon), h));
            PlanetPosition::from_longitude(body, lon, house)
        })
        .collect();

    let mut points: Vec<(&str, f64)> = longitudes
        .iter()
        .map(|&(body, lon)| (body.name(), lon))
        .collect();
    if let Some(a) = angles {
        points.push((ASCENDANT_LABEL, a.ascendant));
    }
    let aspects = AspectCalculator::new().compute_aspects(&points);

    let ayanamsa = linear_lahiri_ayanamsa(query.year);
    let vedic = VedicChart {
        ayanamsa,
        planets: longitudes
            .iter()
            .map(|&(body, lon)| VedicPosition::from_tropical(body.name(), lon, ayanamsa))
            .collect(),
        ascendant: angles
            .map(|a| VedicPosition::from_tropical(ASCENDANT_LABEL, a.ascendant, ayanamsa)),
    };

    log::debug!(
        "Chart for {instant}: {} planets, {} aspects, houses {}",
        planets.len(),
        aspects.len(),
        if houses.is_some() { "computed" } else { "suppressed" }
    );

    Ok(NatalChart {
        birth_data: query.clone(),
        instant,
        time_missing,
        planets,
        ascendant: angles.map(|a| AnglePosition::from_longitude(a.ascendant)),
        midheaven: angles.map(|a| AnglePosition::from_longitude(a.midheaven)),
        descendant: angles.map(|a| AnglePosition::from_longitude(a.descendant())),
        imum_coeli: angles.map(|a| AnglePosition::from_longitude(a.imum_coeli())),
        houses,
        aspects,
        vedic,
        chinese: chinese_zodiac(query.year),
    })
}
