//! Natal chart engine: planetary longitudes, angles, whole-sign houses,
//! aspects, a sidereal reprojection and the Chinese year designation.

pub mod aspects;
pub mod chart;
pub mod chinese;
pub mod ephemeris;
pub mod error;
pub mod vedic;
pub mod western;
pub mod zodiac;

pub use chart::{
    compute_natal_chart, compute_natal_chart_with, AnglePosition, BirthQuery, NatalChart,
    PlanetPosition,
};
#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisAdapter;
pub use ephemeris::{Body, Ephemeris, EphemerisError, MeanElementsEphemeris};
pub use error::ChartError;
pub use zodiac::ZodiacSign;
