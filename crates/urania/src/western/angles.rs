//! Ascendant and Midheaven from sidereal time.
//!
//! Standard spherical astronomy: the ecliptic degree on the eastern horizon
//! and on the upper meridian for a given local sidereal time and latitude,
//! with a fixed obliquity of the ecliptic.

use crate::ephemeris::GeoLocation;
use crate::zodiac::{normalize_degrees, normalize_hours};
use serde::{Deserialize, Serialize};

/// Obliquity of the ecliptic, degrees (J2000 mean value).
pub const OBLIQUITY_DEG: f64 = 23.4393;

/// Ascendant and Midheaven longitudes in degrees, both in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
}

impl ChartAngles {
    pub fn descendant(&self) -> f64 {
        normalize_degrees(self.ascendant + 180.0)
    }

    pub fn imum_coeli(&self) -> f64 {
        normalize_degrees(self.midheaven + 180.0)
    }
}

/// Local sidereal time in hours, range [0, 24).
pub fn local_sidereal_time(gst_hours: f64, longitude_deg: f64) -> f64 {
    normalize_hours(gst_hours + longitude_deg / 15.0)
}

/// `tan(latitude)` diverges at the poles, where the horizon and the ecliptic
/// no longer intersect in a well-defined rising degree.
pub fn is_polar(latitude_deg: f64) -> bool {
    !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0
}

/// Ecliptic longitude of the Ascendant.
pub fn ascendant(lst_hours: f64, latitude_deg: f64) -> f64 {
    let lst = (lst_hours * 15.0).to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        lst.cos(),
        -(lst.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_degrees(asc.to_degrees())
}

/// Ecliptic longitude of the Midheaven.
pub fn midheaven(lst_hours: f64) -> f64 {
    let lst = (lst_hours * 15.0).to_radians();
    let eps = OBLIQUITY_DEG.to_radians();

    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    normalize_degrees(mc.to_degrees())
}

/// Compute both angles from Greenwich sidereal time (shares the LST).
pub fn compute_angles(gst_hours: f64, location: &GeoLocation) -> ChartAngles {
    let lst = local_sidereal_time(gst_hours, location.lon);
    ChartAngles {
        ascendant: ascendant(lst, location.lat),
        midheaven: midheaven(lst),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_local_sidereal_time_wraps() {
        assert!((local_sidereal_time(23.0, 30.0) - 1.0).abs() < 1e-12);
        assert!((local_sidereal_time(1.0, -30.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_lst_zero_at_equator() {
        // Aries point culminates: MC = 0°, Cancer rises
        let angles = compute_angles(0.0, &GeoLocation { lat: 0.0, lon: 0.0 });
        assert!(arc_distance(angles.midheaven, 0.0) < 1e-9);
        assert!(arc_distance(angles.ascendant, 90.0) < 1e-9);
    }

    #[test]
    fn test_lst_six_hours_at_equator() {
        let angles = compute_angles(6.0, &GeoLocation { lat: 0.0, lon: 0.0 });
        assert!(arc_distance(angles.midheaven, 90.0) < 1e-9);
        assert!(arc_distance(angles.ascendant, 180.0) < 1e-9);
    }

    #[test]
    fn test_ascendant_leads_midheaven_by_about_90() {
        for step in 0..24 {
            let angles = compute_angles(step as f64, &GeoLocation { lat: 0.0, lon: 0.0 });
            let lead = normalize_degrees(angles.ascendant - angles.midheaven);
            assert!((60.0..=120.0).contains(&lead), "lst={step} lead={lead}");
        }
    }

    #[test]
    fn test_longitude_shifts_lst() {
        let greenwich = compute_angles(3.0, &GeoLocation { lat: 40.0, lon: 0.0 });
        let east = compute_angles(2.0, &GeoLocation { lat: 40.0, lon: 15.0 });
        assert!(arc_distance(greenwich.ascendant, east.ascendant) < 1e-9);
        assert!(arc_distance(greenwich.midheaven, east.midheaven) < 1e-9);
    }

    #[test]
    fn test_derived_angles() {
        let angles = ChartAngles { ascendant: 200.0, midheaven: 110.0 };
        assert_eq!(angles.descendant(), 20.0);
        assert_eq!(angles.imum_coeli(), 290.0);
    }

    #[test]
    fn test_is_polar() {
        assert!(is_polar(90.0));
        assert!(is_polar(-90.0));
        assert!(is_polar(f64::NAN));
        assert!(!is_polar(89.9));
        assert!(!is_polar(0.0));
    }
}
