pub mod ayanamsa;
pub mod nakshatra;
pub mod types;

pub use ayanamsa::{linear_lahiri_ayanamsa, sidereal_longitude};
pub use nakshatra::{get_nakshatra_for_longitude, NakshatraPlacement};
pub use types::{VedicChart, VedicPosition, VEDIC_SIGNS};
