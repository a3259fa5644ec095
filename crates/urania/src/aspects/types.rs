use serde::{Deserialize, Serialize};
use std::fmt;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Aspect catalog in evaluation order. The first entry whose orb window
/// contains a separation wins, so the order is part of the contract.
pub const ASPECT_CATALOG: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact angle for this aspect, degrees
    pub const fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Maximum allowed deviation from the exact angle, degrees
    pub const fn max_orb(self) -> f64 {
        match self {
            AspectKind::Sextile => 6.0,
            _ => 8.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core aspect information, full precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub is_exact: bool,
}

/// An aspect between two chart points, as reported in the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub planet1: String,
    pub planet2: String,
    pub aspect: AspectKind,
    /// Exact angle of the aspect type
    pub angle: f64,
    /// Deviation from exact, one decimal
    pub orb: f64,
    pub exact: bool,
}
