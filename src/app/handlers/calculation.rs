//! Handler für die beiden Berechnungen.

use scrap_coords_engine::BEACON_COUNT;

use crate::app::use_cases;
use crate::app::AppState;

/// Bestimmt die Position aus den übergebenen Distanz-Eingaben.
pub fn locate(state: &mut AppState, inputs: &[String; BEACON_COUNT]) {
    use_cases::locate::locate_position(state, inputs);
}

/// Berechnet die Baken-Distanzen aus den übergebenen Koordinaten-Eingaben.
pub fn distances(state: &mut AppState, x: &str, y: &str) {
    use_cases::distances::compute_distances(state, x, y);
}
