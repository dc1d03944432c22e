//! Baken-Layout: vier feste Referenzpunkte mit Farbkennung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::bounds::MapBounds;

/// Anzahl der Baken. Das Layout ist fest auf vier Baken ausgelegt.
pub const BEACON_COUNT: usize = 4;

/// Farbkennung einer Bake (gleichzeitig ihr Anzeigename).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeaconColor {
    /// Bake #1
    Red,
    /// Bake #2
    Green,
    /// Bake #3
    Blue,
    /// Bake #4
    Yellow,
}

impl BeaconColor {
    /// Alle Farben in Baken-Reihenfolge.
    pub const ALL: [BeaconColor; BEACON_COUNT] = [
        BeaconColor::Red,
        BeaconColor::Green,
        BeaconColor::Blue,
        BeaconColor::Yellow,
    ];

    /// Index der Farbe innerhalb von [`BeaconColor::ALL`].
    pub fn index(self) -> usize {
        match self {
            BeaconColor::Red => 0,
            BeaconColor::Green => 1,
            BeaconColor::Blue => 2,
            BeaconColor::Yellow => 3,
        }
    }

    /// Anzeigefarbe (sRGB).
    pub fn rgb(self) -> [u8; 3] {
        match self {
            BeaconColor::Red => [0xe5, 0x48, 0x4d],
            BeaconColor::Green => [0x46, 0xa7, 0x58],
            BeaconColor::Blue => [0x3e, 0x8e, 0xde],
            BeaconColor::Yellow => [0xf5, 0xd9, 0x0a],
        }
    }
}

/// Eine Bake mit bekannter Position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beacon {
    /// Farbkennung
    pub color: BeaconColor,
    /// Position in Kartenkoordinaten
    pub position: DVec2,
}

impl Beacon {
    /// Erstellt eine Bake.
    pub fn new(color: BeaconColor, position: DVec2) -> Self {
        Self { color, position }
    }
}

/// Kartenrand, an dem zwei Baken liegen (für die Richtungsanzeige).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// +X
    PositiveX,
    /// -X
    NegativeX,
    /// +Y
    PositiveY,
    /// -Y
    NegativeY,
}

impl EdgeSide {
    /// Alle Ränder in Anzeigereihenfolge.
    pub const ALL: [EdgeSide; 4] = [
        EdgeSide::PositiveX,
        EdgeSide::NegativeX,
        EdgeSide::PositiveY,
        EdgeSide::NegativeY,
    ];

    /// Achsenbeschriftung, z.B. `+X`.
    pub fn label(self) -> &'static str {
        match self {
            EdgeSide::PositiveX => "+X",
            EdgeSide::NegativeX => "-X",
            EdgeSide::PositiveY => "+Y",
            EdgeSide::NegativeY => "-Y",
        }
    }

    /// Position entlang des Randes. Der Rand wird in Richtung der
    /// Normalen mit vertauschten Achsen durchlaufen: +X läuft nach +Y,
    /// -Y nach -X.
    fn walk(self, position: DVec2) -> f64 {
        match self {
            EdgeSide::PositiveX => position.y,
            EdgeSide::NegativeX => -position.y,
            EdgeSide::PositiveY => position.x,
            EdgeSide::NegativeY => -position.x,
        }
    }

    /// Sortierschlüssel: größer = näher an diesem Rand.
    fn extent(self, position: DVec2) -> f64 {
        match self {
            EdgeSide::PositiveX => position.x,
            EdgeSide::NegativeX => -position.x,
            EdgeSide::PositiveY => position.y,
            EdgeSide::NegativeY => -position.y,
        }
    }
}

/// Unveränderliches Layout der vier Baken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconLayout {
    beacons: [Beacon; BEACON_COUNT],
}

impl BeaconLayout {
    /// Erstellt ein Layout aus vier Baken.
    pub fn new(beacons: [Beacon; BEACON_COUNT]) -> Self {
        Self { beacons }
    }

    /// Standard-Layout: Rot (0,0), Grün (8192,0), Blau (8192,6144), Gelb (0,6144).
    pub fn standard() -> Self {
        Self::at_corners(&MapBounds::STANDARD)
    }

    /// Setzt je eine Bake in jede Ecke des Kartenbereichs.
    pub fn at_corners(bounds: &MapBounds) -> Self {
        let corners = bounds.corners();
        Self {
            beacons: std::array::from_fn(|i| Beacon::new(BeaconColor::ALL[i], corners[i])),
        }
    }

    /// Alle Baken in Reihenfolge.
    pub fn beacons(&self) -> &[Beacon; BEACON_COUNT] {
        &self.beacons
    }

    /// Nur die Positionen, in Baken-Reihenfolge.
    pub fn positions(&self) -> [DVec2; BEACON_COUNT] {
        self.beacons.map(|b| b.position)
    }

    /// Die zwei Baken, die am gegebenen Kartenrand liegen, in Laufrichtung
    /// des Randes (+X nach +Y, -X nach -Y, +Y nach +X, -Y nach -X).
    pub fn edge_beacons(&self, side: EdgeSide) -> [&Beacon; 2] {
        let mut order: [usize; BEACON_COUNT] = std::array::from_fn(|i| i);
        // stabil: bei Gleichstand bleibt die Baken-Reihenfolge erhalten
        order.sort_by(|&a, &b| {
            side.extent(self.beacons[b].position)
                .total_cmp(&side.extent(self.beacons[a].position))
        });
        let mut pair = [&self.beacons[order[0]], &self.beacons[order[1]]];
        pair.sort_by(|a, b| side.walk(a.position).total_cmp(&side.walk(b.position)));
        pair
    }
}

impl Default for BeaconLayout {
    fn default() -> Self {
        Self::standard()
    }
}
