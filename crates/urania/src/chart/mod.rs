pub mod assembler;
pub mod instant;
pub mod types;

pub use assembler::{compute_natal_chart, compute_natal_chart_with, ASCENDANT_LABEL};
pub use instant::{resolve_instant, ResolvedInstant};
pub use types::{AnglePosition, BirthQuery, NatalChart, PlanetPosition};
