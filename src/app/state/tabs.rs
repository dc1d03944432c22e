//! Zustand der beiden Rechner-Tabs.

use glam::DVec2;
use scrap_coords_engine::{CalcError, ValidationLimits, BEACON_COUNT};

/// Sichtbarer Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Koordinaten aus Distanzen
    #[default]
    Coordinates,
    /// Distanzen aus Koordinaten
    Distances,
}

impl Tab {
    /// Alle Tabs in Anzeigereihenfolge.
    pub const ALL: [Tab; 2] = [Tab::Coordinates, Tab::Distances];
}

/// Eingaben und letztes Ergebnis des Koordinaten-Tabs.
///
/// Das Ergebnis wird typisiert gehalten und erst beim Zeichnen in der
/// aktuellen Sprache formatiert.
#[derive(Debug, Default)]
pub struct CoordinatesTabState {
    /// Rohtexte der vier Distanzfelder
    pub distance_inputs: [String; BEACON_COUNT],
    /// Letztes Ergebnis (None = noch nicht berechnet)
    pub result: Option<Result<DVec2, CalcError>>,
    /// Grenzen, gegen die `result` geprüft wurde
    pub checked_limits: ValidationLimits,
}

/// Eingaben und letztes Ergebnis des Distanz-Tabs.
#[derive(Debug, Default)]
pub struct DistancesTabState {
    /// Rohtext X
    pub x_input: String,
    /// Rohtext Y
    pub y_input: String,
    /// Letztes Ergebnis (None = noch nicht berechnet)
    pub result: Option<Result<[f64; BEACON_COUNT], CalcError>>,
    /// Grenzen, gegen die `result` geprüft wurde
    pub checked_limits: ValidationLimits,
}
