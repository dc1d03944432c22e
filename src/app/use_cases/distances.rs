//! Use-Case: Distanzen zu allen Baken aus einer Position berechnen.

use crate::app::AppState;

/// Validiert X/Y und legt die vier Distanzen im Tab ab.
pub fn compute_distances(state: &mut AppState, x: &str, y: &str) {
    let result = state.calculator().distances(x, y);

    match &result {
        Ok(distances) => log::info!("Distanzen berechnet: {:?}", distances),
        Err(e) => log::debug!("Eingabe abgelehnt: {}", e),
    }

    state.distances.result = Some(result);
    state.distances.checked_limits = state.options.validation;
}
