//! Achsenparallele Kartengrenzen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rechteckiger Kartenbereich `[min.x, max.x] × [min.y, max.y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Untere linke Ecke
    pub min: DVec2,
    /// Obere rechte Ecke
    pub max: DVec2,
}

impl MapBounds {
    /// Standard-Karte: 8192 × 6144 Karteneinheiten.
    pub const STANDARD: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::new(8192.0, 6144.0),
    };

    /// Erstellt Grenzen aus zwei beliebigen Eckpunkten.
    /// Die Ecken werden komponentenweise sortiert.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Prüft, ob ein Punkt inklusive Rand im Bereich liegt.
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Projiziert einen Punkt auf den Bereich (komponentenweises Clamping).
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        point.clamp(self.min, self.max)
    }

    /// Die vier Ecken in der Reihenfolge unten-links, unten-rechts, oben-rechts, oben-links.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}
