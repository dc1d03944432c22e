//! Positions-Solver: begrenzte nichtlineare Kleinste-Quadrate-Trilateration.
//!
//! Startwert ist der Schwerpunkt der Baken, minimiert wird mit einem projizierten
//! L-BFGS (Box-Constraints) auf der Residuen-Quadratsumme.

mod lbfgsb;
mod objective;


use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::beacon::BEACON_COUNT;
use crate::bounds::MapBounds;
use crate::error::SolveError;

pub use objective::ResidualObjective;

/// Einstellungen des Minimierers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Relative Toleranz der Zielfunktionsabnahme pro Iteration
    pub objective_tolerance: f64,
    /// Toleranz der Unendlich-Norm des projizierten Gradienten
    pub gradient_tolerance: f64,
    /// Maximale Anzahl Iterationen
    pub max_iterations: usize,
    /// Anzahl gespeicherter Korrekturpaare
    pub history_size: usize,
    /// Maximale Backtracking-Schritte pro Liniensuche
    pub max_line_search_steps: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            objective_tolerance: 1e-9,
            gradient_tolerance: 1e-9,
            max_iterations: 15_000,
            history_size: 10,
            max_line_search_steps: 40,
        }
    }
}

/// Grund für das erfolgreiche Ende der Minimierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Relative Abnahme der Zielfunktion unter der Toleranz
    ObjectiveTolerance,
    /// Projizierter Gradient unter der Toleranz
    GradientTolerance,
}

/// Ergebnis einer erfolgreichen Positionsbestimmung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveReport {
    /// Gefundene Position (immer innerhalb der Grenzen)
    pub position: DVec2,
    /// Zielfunktionswert an der Position
    pub objective: f64,
    /// Unendlich-Norm des projizierten Gradienten an der Position
    pub projected_gradient_norm: f64,
    /// Durchgeführte Iterationen
    pub iterations: usize,
    /// Anzahl Auswertungen von Zielfunktion und Gradient
    pub evaluations: usize,
    /// Abbruchkriterium
    pub termination: Termination,
}

/// Bestimmt die Position mit vollständigem Diagnosebericht.
pub fn solve_position(
    beacons: &[DVec2; BEACON_COUNT],
    distances: &[f64; BEACON_COUNT],
    bounds: &MapBounds,
    settings: &SolverSettings,
) -> Result<SolveReport, SolveError> {
    let objective = ResidualObjective::new(beacons, distances);
    let start = beacons.iter().copied().sum::<DVec2>() / BEACON_COUNT as f64;

    let result = lbfgsb::minimize_bounded(
        |p| objective.value_and_gradient(p),
        start,
        bounds,
        settings,
    );

    match &result {
        Ok(report) => log::debug!(
            "Position ({:.4}, {:.4}) nach {} Iterationen, f={:e} ({:?})",
            report.position.x,
            report.position.y,
            report.iterations,
            report.objective,
            report.termination
        ),
        Err(e) => log::debug!("Minimierung ohne Konvergenz: {}", e),
    }

    result
}

/// Bestimmt die Position `(x, y)` innerhalb von `bounds`, die die Summe der
/// quadrierten Distanz-Residuen minimiert.
pub fn calculate_position_2d(
    beacons: &[DVec2; BEACON_COUNT],
    distances: &[f64; BEACON_COUNT],
    bounds: &MapBounds,
    settings: &SolverSettings,
) -> Result<DVec2, SolveError> {
    solve_position(beacons, distances, bounds, settings).map(|report| report.position)
}
