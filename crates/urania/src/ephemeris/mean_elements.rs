//! Built-in low-precision ephemeris.
//!
//! Used when the crate is built without the `swisseph` feature, and as a
//! deterministic pure-Rust backend in tests and benches.
//!
//! Planets are propagated from Keplerian mean elements referred to the J2000
//! ecliptic and equinox (Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets", table 1, valid 1800–2050), reduced to
//! geocentric longitude by subtracting the Earth–Moon barycentre and
//! precessed to the equinox of date. The Moon uses the principal periodic
//! terms of the lunar theory (Meeus ch. 47). Expected error is around 0.01°
//! for the Sun, 0.3° for the Moon and under 1° for the planets.

use crate::ephemeris::adapter::{Ephemeris, EphemerisError};
use crate::ephemeris::julian::{datetime_to_julian_day, greenwich_sidereal_hours, julian_centuries};
use crate::ephemeris::types::Body;
use crate::zodiac::normalize_degrees;
use chrono::{DateTime, Utc};

/// General precession in longitude, degrees per Julian century.
const PRECESSION_DEG_PER_CENTURY: f64 = 5_028.796_195 / 3_600.0;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 32;

/// Orbital elements as (value at J2000, rate per century).
struct OrbitalElements {
    /// Semi-major axis, AU
    a: (f64, f64),
    /// Eccentricity
    e: (f64, f64),
    /// Inclination, degrees
    i: (f64, f64),
    /// Mean longitude, degrees
    l: (f64, f64),
    /// Longitude of perihelion, degrees
    peri: (f64, f64),
    /// Longitude of the ascending node, degrees
    node: (f64, f64),
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: OrbitalElements = OrbitalElements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARYCENTRE: OrbitalElements = OrbitalElements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: OrbitalElements = OrbitalElements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: OrbitalElements = OrbitalElements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: OrbitalElements = OrbitalElements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

/// Principal lunar longitude terms: (D, M, M', F multipliers, amplitude in degrees).
const MOON_LONGITUDE_TERMS: &[(f64, f64, f64, f64, f64)] = &[
    (0.0, 0.0, 1.0, 0.0, 6.288_774),
    (2.0, 0.0, -1.0, 0.0, 1.274_027),
    (2.0, 0.0, 0.0, 0.0, 0.658_314),
    (0.0, 0.0, 2.0, 0.0, 0.213_618),
    (0.0, 1.0, 0.0, 0.0, -0.185_116),
    (0.0, 0.0, 0.0, 2.0, -0.114_332),
    (2.0, 0.0, -2.0, 0.0, 0.058_793),
    (2.0, -1.0, -1.0, 0.0, 0.057_066),
    (2.0, 0.0, 1.0, 0.0, 0.053_322),
    (2.0, -1.0, 0.0, 0.0, 0.045_758),
    (0.0, 1.0, -1.0, 0.0, -0.040_923),
    (1.0, 0.0, 0.0, 0.0, -0.034_720),
    (0.0, 1.0, 1.0, 0.0, -0.030_383),
    (2.0, 0.0, 0.0, -2.0, 0.015_327),
    (0.0, 0.0, 1.0, 2.0, -0.012_528),
    (0.0, 0.0, 1.0, -2.0, 0.010_980),
    (4.0, 0.0, -1.0, 0.0, 0.010_675),
    (0.0, 0.0, 3.0, 0.0, 0.010_034),
    (4.0, 0.0, -2.0, 0.0, 0.008_548),
    (2.0, 1.0, -1.0, 0.0, -0.007_888),
    (2.0, 1.0, 0.0, 0.0, -0.006_766),
    (1.0, 0.0, -1.0, 0.0, -0.005_163),
    (1.0, 1.0, 0.0, 0.0, 0.004_987),
    (2.0, -1.0, 1.0, 0.0, 0.004_036),
    (2.0, 0.0, 2.0, 0.0, 0.003_994),
];

/// Resident ephemeris computed from mean orbital elements; needs no data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementsEphemeris;

impl MeanElementsEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric ecliptic longitude of `body`, mean equinox of date, in degrees.
    pub fn longitude_at_jd(&self, body: Body, jd: f64) -> f64 {
        let t = julian_centuries(jd);
        let longitude = match body {
            Body::Moon => return moon_longitude(t),
            Body::Sun => {
                let earth = heliocentric_position(&EARTH_MOON_BARYCENTRE, t);
                (-earth[1]).atan2(-earth[0]).to_degrees()
            }
            _ => {
                let earth = heliocentric_position(&EARTH_MOON_BARYCENTRE, t);
                let planet = heliocentric_position(planet_elements(body), t);
                let dx = planet[0] - earth[0];
                let dy = planet[1] - earth[1];
                dy.atan2(dx).to_degrees()
            }
        };
        normalize_degrees(longitude + PRECESSION_DEG_PER_CENTURY * t)
    }
}

impl Ephemeris for MeanElementsEphemeris {
    fn longitude_of(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let longitude = self.longitude_at_jd(body, datetime_to_julian_day(instant));
        if !longitude.is_finite() {
            return Err(EphemerisError::NonFinite {
                quantity: format!("{} longitude", body),
            });
        }
        Ok(longitude)
    }

    fn sidereal_time_at(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(greenwich_sidereal_hours(datetime_to_julian_day(instant)))
    }
}

fn planet_elements(body: Body) -> &'static OrbitalElements {
    match body {
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        // Sun and Moon never reach the Keplerian path.
        Body::Sun | Body::Moon => &EARTH_MOON_BARYCENTRE,
    }
}

/// Heliocentric ecliptic J2000 coordinates in AU.
fn heliocentric_position(el: &OrbitalElements, t: f64) -> [f64; 3] {
    let at = |(value, rate): (f64, f64)| value + rate * t;

    let a = at(el.a);
    let e = at(el.e);
    let i = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    // Mean anomaly reduced to [-180, 180)
    let m = (normalize_degrees(l - peri + 180.0) - 180.0).to_radians();

    let ecc_anomaly = solve_kepler(m, e);
    let x_orb = a * (ecc_anomaly.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sin_w, cos_w) = omega.sin_cos();
    let (sin_n, cos_n) = node.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    [
        (cos_w * cos_n - sin_w * sin_n * cos_i) * x_orb
            + (-sin_w * cos_n - cos_w * sin_n * cos_i) * y_orb,
        (cos_w * sin_n + sin_w * cos_n * cos_i) * x_orb
            + (-sin_w * sin_n + cos_w * cos_n * cos_i) * y_orb,
        (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb,
    ]
}

/// Solve Kepler's equation `M = E - e sin E` by Newton iteration.
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anomaly
}

/// Geocentric lunar longitude, mean equinox of date, in degrees.
fn moon_longitude(t: f64) -> f64 {
    let mean_longitude = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let m_prime = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();

    // Decrease of the Earth's orbital eccentricity
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let perturbation: f64 = MOON_LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, amplitude)| {
            let arg = cd * d + cm * m + cmp * m_prime + cf * f;
            amplitude * e.powi(cm.abs() as i32) * arg.sin()
        })
        .sum();

    normalize_degrees(mean_longitude + perturbation)
}
