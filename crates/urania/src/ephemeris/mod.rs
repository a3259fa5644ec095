pub mod adapter;
pub mod julian;
pub mod mean_elements;
#[cfg(feature = "swisseph")]
pub mod swiss;
pub mod types;

pub use adapter::{Ephemeris, EphemerisError};
pub use mean_elements::MeanElementsEphemeris;
#[cfg(feature = "swisseph")]
pub use swiss::SwissEphemerisAdapter;
pub use types::{Body, GeoLocation};
