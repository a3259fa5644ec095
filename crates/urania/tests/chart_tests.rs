use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Timelike, Utc};
use std::cell::RefCell;
use urania::aspects::AspectKind;
use urania::ephemeris::{Body, Ephemeris, EphemerisError};
use urania::vedic::linear_lahiri_ayanamsa;
use urania::zodiac::normalize_degrees;
use urania::{compute_natal_chart, compute_natal_chart_with, BirthQuery, ChartError, ZodiacSign};

/// Answers every instant with the same fixed table.
struct FixedEphemeris {
    longitudes: [f64; 7],
    gst_hours: f64,
    instants: RefCell<Vec<DateTime<Utc>>>,
}

impl FixedEphemeris {
    fn new(longitudes: [f64; 7], gst_hours: f64) -> Self {
        Self {
            longitudes,
            gst_hours,
            instants: RefCell::new(Vec::new()),
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn longitude_of(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.instants.borrow_mut().push(instant);
        Ok(self.longitudes[body.swiss_id() as usize])
    }

    fn sidereal_time_at(&self, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(self.gst_hours)
    }
}

/// Fails for one body, and for sidereal time.
struct BrokenEphemeris {
    missing: Body,
    value: f64,
}

impl Ephemeris for BrokenEphemeris {
    fn longitude_of(&self, body: Body, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        if body == self.missing {
            Err(EphemerisError::UnknownBody(body))
        } else {
            Ok(self.value)
        }
    }

    fn sidereal_time_at(&self, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Err(EphemerisError::NonFinite {
            quantity: "sidereal time".to_string(),
        })
    }
}

// Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn
const TABLE: [f64; 7] = [10.0, 130.0, 15.0, 70.0, 190.0, 250.0, 340.0];

fn query(hour: i32, utc_offset: f64) -> BirthQuery {
    BirthQuery {
        year: 2000,
        month: 1,
        day: 1,
        hour,
        minute: 0,
        latitude: 0.0,
        longitude: 0.0,
        city: Some("Null Island".to_string()),
        utc_offset,
    }
}

#[test]
fn test_fixed_table_chart() {
    // GST 1h at longitude 0: LST 15°, Ascendant ~103.8° (Cancer), MC ~16.3° (Aries)
    let ephemeris = FixedEphemeris::new(TABLE, 1.0);
    let chart = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap();

    assert!(!chart.time_missing);
    assert_eq!(chart.planets.len(), 7);

    let asc = chart.ascendant.unwrap();
    assert_eq!(asc.sign, ZodiacSign::Cancer);
    assert_abs_diff_eq!(asc.longitude, 103.81, epsilon = 0.02);
    let mc = chart.midheaven.unwrap();
    assert_eq!(mc.sign, ZodiacSign::Aries);
    assert_abs_diff_eq!(mc.longitude, 16.28, epsilon = 0.02);
    assert_eq!(chart.descendant.unwrap().sign, ZodiacSign::Capricorn);
    assert_eq!(chart.imum_coeli.unwrap().sign, ZodiacSign::Libra);

    let houses = chart.houses.as_ref().unwrap();
    assert_eq!(houses[0].sign, ZodiacSign::Cancer);
    assert_eq!(houses[0].start_degree, 90.0);

    assert_eq!(chart.planet(Body::Sun).unwrap().house, Some(10));
    assert_eq!(chart.planet(Body::Moon).unwrap().house, Some(2));
    assert_eq!(chart.planet(Body::Saturn).unwrap().house, Some(9));

    let sun_moon = chart.aspect_between("Moon", "Sun").unwrap();
    assert_eq!(sun_moon.aspect, AspectKind::Trine);
    assert!(sun_moon.exact);

    let mercury_asc = chart.aspect_between("Mercury", "Ascendant").unwrap();
    assert_eq!(mercury_asc.aspect, AspectKind::Square);
    assert_eq!(mercury_asc.orb, 1.2);

    assert!(chart.aspect_between("Moon", "Ascendant").is_none());
}

#[test]
fn test_aspect_points_are_measured_points() {
    let ephemeris = FixedEphemeris::new(TABLE, 1.0);
    let chart = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap();

    let mut names: Vec<&str> = Body::ALL.iter().map(|b| b.name()).collect();
    names.push("Ascendant");
    for aspect in &chart.aspects {
        assert!(names.contains(&aspect.planet1.as_str()));
        assert!(names.contains(&aspect.planet2.as_str()));
        assert_ne!(aspect.planet1, aspect.planet2);
        assert!(aspect.orb <= aspect.aspect.max_orb());
    }
}

#[test]
fn test_unknown_time_suppresses_angles_and_houses() {
    // A NaN sidereal time would fail the chart if it were consulted
    let ephemeris = FixedEphemeris::new(TABLE, f64::NAN);
    let mut q = query(BirthQuery::UNKNOWN_HOUR, -5.0);
    q.latitude = 90.0;

    let chart = compute_natal_chart_with(&q, &ephemeris).unwrap();

    assert!(chart.time_missing);
    assert!(chart.ascendant.is_none());
    assert!(chart.midheaven.is_none());
    assert!(chart.descendant.is_none());
    assert!(chart.imum_coeli.is_none());
    assert!(chart.houses.is_none());
    assert!(chart.vedic.ascendant.is_none());
    assert_eq!(chart.planets.len(), 7);
    assert!(chart.planets.iter().all(|p| p.house.is_none()));
    assert!(chart.aspects.iter().all(|a| a.planet2 != "Ascendant"));

    // Noon local at -5 is 17:00 UTC
    assert_eq!(chart.instant.hour(), 17);
    assert!(ephemeris.instants.borrow().iter().all(|i| *i == chart.instant));
}

#[test]
fn test_utc_equivalence() {
    let local = query(12, -5.0);
    let utc = query(17, 0.0);

    let a = compute_natal_chart(&local).unwrap();
    let b = compute_natal_chart(&utc).unwrap();

    assert_eq!(a.instant, b.instant);
    assert_eq!(a.planets, b.planets);
    assert_eq!(a.vedic.planets, b.vedic.planets);
}

#[test]
fn test_deterministic_output() {
    let q = query(8, 2.5);
    let first = compute_natal_chart(&q).unwrap().to_json(false).unwrap();
    let second = compute_natal_chart(&q).unwrap().to_json(false).unwrap();
    assert_eq!(first, second);

    let ephemeris = FixedEphemeris::new(TABLE, 7.25);
    let first = compute_natal_chart_with(&q, &ephemeris).unwrap();
    let second = compute_natal_chart_with(&q, &ephemeris).unwrap();
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_end_to_end_j2000() {
    let chart = compute_natal_chart(&query(12, 0.0)).unwrap();

    assert_eq!(chart.instant, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
    assert_eq!(chart.planets.len(), 7);
    assert!(chart.ascendant.is_some());
    assert!(chart.midheaven.is_some());
    assert_eq!(chart.houses.as_ref().map(Vec::len), Some(12));

    // GST 18.697h: Ascendant ~11.4° Aries, MC ~279.6° Capricorn
    let asc = chart.ascendant.unwrap();
    assert_eq!(asc.sign, ZodiacSign::Aries);
    assert_abs_diff_eq!(asc.longitude, 11.4, epsilon = 0.1);
    let mc = chart.midheaven.unwrap();
    assert_eq!(mc.sign, ZodiacSign::Capricorn);
    assert_abs_diff_eq!(mc.longitude, 279.6, epsilon = 0.1);

    let sun = chart.planet(Body::Sun).unwrap();
    assert_eq!(sun.sign, ZodiacSign::Capricorn);
    assert_eq!(sun.house, Some(10));
    assert_abs_diff_eq!(sun.longitude, 280.37, epsilon = 0.1);

    assert_eq!(chart.chinese.pillar, "Metal Dragon");
    assert_abs_diff_eq!(chart.vedic.ayanamsa, 24.1 - 24.0 * 0.0139, epsilon = 1e-9);
    assert_eq!(chart.vedic.planets.len(), 7);
    assert!(chart.vedic.ascendant.is_some());
}

#[test]
fn test_json_field_names() {
    let ephemeris = FixedEphemeris::new(TABLE, 1.0);
    let chart = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap();
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["timeMissing"], false);
    assert_eq!(json["birthData"]["utcOffset"], 0.0);
    assert_eq!(json["birthData"]["city"], "Null Island");
    assert_eq!(json["planets"][0]["name"], "Sun");
    assert_eq!(json["planets"][0]["signIndex"], 0);
    assert_eq!(json["planets"][0]["sign"], "Aries");
    assert_eq!(json["houses"][0]["startDegree"], 90.0);
    assert!(json["imumCoeli"].is_object());
    assert_eq!(json["chinese"]["pillar"], "Metal Dragon");
    assert_eq!(json["instant"], "2000-01-01T12:00:00Z");
}

#[test]
fn test_unnormalized_adapter_longitudes() {
    let table = [-30.0, 725.0, 360.0, -720.5, 0.0, 359.99, 1e6];
    let ephemeris = FixedEphemeris::new(table, 3.0);
    let chart = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap();

    let longitudes: Vec<f64> = chart.planets.iter().map(|p| p.longitude).collect();
    assert_eq!(longitudes[0], 330.0);
    assert_eq!(longitudes[1], 5.0);
    assert_eq!(longitudes[2], 0.0);
    assert_eq!(longitudes[3], 359.5);
    assert_eq!(chart.planets[5].sign, ZodiacSign::Pisces);
    assert_eq!(longitudes[6], 280.0);
}

#[test]
fn test_longitude_rounding_up_to_full_circle_wraps_to_aries() {
    // Moon sits 0.004° short of 0° sidereal after the year-2000 ayanamsa
    let ayanamsa = linear_lahiri_ayanamsa(2000);
    let mut table = [359.996; 7];
    table[1] = normalize_degrees(ayanamsa - 0.004);
    let ephemeris = FixedEphemeris::new(table, 1.0);
    let chart = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap();

    let sun = chart.planet(Body::Sun).unwrap();
    assert_eq!(sun.longitude, 0.0);
    assert_eq!(sun.sign, ZodiacSign::Aries);
    assert_eq!(sun.sign_index, 0);
    assert_eq!(sun.degree, 0.0);
    assert_eq!(sun.decan, 1);
    assert_eq!(sun.ruler, Body::Mars);
    // Cancer rising: Aries is the tenth house
    assert_eq!(sun.house, Some(10));

    for planet in &chart.planets {
        assert!((0.0..360.0).contains(&planet.longitude), "{planet:?}");
    }
    for vedic in &chart.vedic.planets {
        assert!((0.0..360.0).contains(&vedic.longitude), "{vedic:?}");
    }

    let moon = chart.vedic.planets.iter().find(|p| p.name == "Moon").unwrap();
    assert_eq!(moon.longitude, 0.0);
    assert_eq!(moon.sign, "Mesha");
    assert_eq!(moon.sign_index, 0);
    assert_eq!(moon.nakshatra, "Ashwini");
    assert_eq!(moon.pada, 1);

    let json = chart.to_json(false).unwrap();
    assert!(!json.contains("\"longitude\":360"), "{json}");
}

#[test]
fn test_invalid_instant() {
    let ephemeris = FixedEphemeris::new(TABLE, 1.0);
    let mut q = query(12, 0.0);
    q.month = 2;
    q.day = 30;

    let err = compute_natal_chart_with(&q, &ephemeris).unwrap_err();
    assert!(matches!(err, ChartError::InvalidInstant { .. }));
    // Rejected before any adapter call
    assert!(ephemeris.instants.borrow().is_empty());
}

#[test]
fn test_polar_latitude_rejected_with_known_time() {
    let ephemeris = FixedEphemeris::new(TABLE, 1.0);
    for latitude in [90.0, -90.0, f64::NAN] {
        let mut q = query(12, 0.0);
        q.latitude = latitude;
        let err = compute_natal_chart_with(&q, &ephemeris).unwrap_err();
        assert!(matches!(err, ChartError::PolarLatitude { .. }));
    }

    let mut q = query(12, 0.0);
    q.latitude = 89.9;
    assert!(compute_natal_chart_with(&q, &ephemeris).is_ok());
}

#[test]
fn test_ephemeris_failures_propagate() {
    let ephemeris = BrokenEphemeris {
        missing: Body::Mars,
        value: 12.0,
    };
    let err = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap_err();
    assert_eq!(
        err,
        ChartError::EphemerisUnavailable(EphemerisError::UnknownBody(Body::Mars))
    );

    let mut table = TABLE;
    table[3] = f64::INFINITY;
    let ephemeris = FixedEphemeris::new(table, 1.0);
    let err = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap_err();
    assert!(matches!(
        err,
        ChartError::EphemerisUnavailable(EphemerisError::NonFinite { .. })
    ));

    let ephemeris = FixedEphemeris::new(TABLE, f64::NAN);
    let err = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap_err();
    assert!(matches!(err, ChartError::EphemerisUnavailable(_)));
}

#[test]
fn test_planet_supplementary_fields() {
    let ephemeris = FixedEphemeris::new(TABLE, 1.0);
    let chart = compute_natal_chart_with(&query(12, 0.0), &ephemeris).unwrap();

    // Sun 10° Aries: fire, ruled by Mars, second decan ruled by the Sun (Leo)
    let sun = chart.planet(Body::Sun).unwrap();
    assert_eq!(sun.ruler, Body::Mars);
    assert_eq!(sun.decan, 2);
    assert_eq!(sun.decan_ruler, Body::Sun);

    // Sun sidereal: 10 - 23.7664 = 346.2336, Meena, Uttara Bhadrapada
    let vedic_sun = &chart.vedic.planets[0];
    assert_eq!(vedic_sun.sign, "Meena");
    assert_eq!(vedic_sun.degree, 16.2);
    assert_eq!(vedic_sun.nakshatra, "Uttara Bhadrapada");
    assert_eq!(vedic_sun.nakshatra_lord, "Saturn");
}
