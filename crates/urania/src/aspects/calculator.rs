use crate::aspects::types::{AspectCore, AspectRecord, ASPECT_CATALOG};
use crate::zodiac::{normalize_degrees, round1};

/// Orb below which an aspect counts as exact
const EXACT_ORB: f64 = 0.1;

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Classify an angular separation against the catalog, first match wins.
    pub fn classify_separation(&self, separation: f64) -> Option<AspectCore> {
        ASPECT_CATALOG.iter().find_map(|&kind| {
            let orb = (separation - kind.angle()).abs();
            (orb <= kind.max_orb()).then(|| AspectCore {
                kind,
                orb,
                is_exact: orb < EXACT_ORB,
            })
        })
    }

    /// Calculate aspect between two longitudes
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<AspectCore> {
        self.classify_separation(angular_separation(lon1, lon2))
    }

    /// Compute aspects between every unordered pair of named points.
    ///
    /// Pairs are visited as (i, j) with i < j in input order; at most one
    /// aspect is recorded per pair.
    pub fn compute_aspects(&self, points: &[(&str, f64)]) -> Vec<AspectRecord> {
        let mut pairs = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let (name1, lon1) = points[i];
                let (name2, lon2) = points[j];

                if let Some(aspect) = self.calculate_aspect(lon1, lon2) {
                    pairs.push(AspectRecord {
                        planet1: name1.to_string(),
                        planet2: name2.to_string(),
                        aspect: aspect.kind,
                        angle: aspect.kind.angle(),
                        orb: round1(aspect.orb),
                        exact: aspect.is_exact,
                    });
                }
            }
        }
        log::debug!("{} aspects among {} points", pairs.len(), points.len());
        pairs
    }
}
