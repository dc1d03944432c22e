//! Use-Case: Position aus vier Baken-Distanzen bestimmen.

use scrap_coords_engine::{CalcError, BEACON_COUNT};

use crate::app::AppState;

/// Validiert die Eingaben, löst die Position und legt das Ergebnis im Tab ab.
///
/// Fehler werden nicht weitergereicht, sondern als Ergebnis angezeigt.
pub fn locate_position(state: &mut AppState, inputs: &[String; BEACON_COUNT]) {
    let result = state.calculator().locate(inputs);

    match &result {
        Ok(position) => log::info!(
            "Position berechnet: x={:.2}, y={:.2}",
            position.x,
            position.y
        ),
        Err(CalcError::SolveFailed(reason)) => {
            log::warn!("Positionsbestimmung fehlgeschlagen: {}", reason)
        }
        Err(e) => log::debug!("Eingabe abgelehnt: {}", e),
    }

    state.coordinates.result = Some(result);
    state.coordinates.checked_limits = state.options.validation;
}
