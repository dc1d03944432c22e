//! Anfrage-Pipelines: Rohtext → Validierung → Solver bzw. Distanzrechner.

use glam::DVec2;

use crate::beacon::{BeaconLayout, BEACON_COUNT};
use crate::bounds::MapBounds;
use crate::distance::calculate_distances;
use crate::error::CalcError;
use crate::solver::{solve_position, SolverSettings};
use crate::validation::{parse_coordinate_inputs, parse_distance_inputs, ValidationLimits};

/// Bündelt alles, was eine Berechnungsanfrage braucht. Kein globaler Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Baken-Layout
    pub beacons: BeaconLayout,
    /// Zulässiger Bereich der Lösung
    pub bounds: MapBounds,
    /// Plausibilitätsgrenzen der Eingaben
    pub limits: ValidationLimits,
    /// Minimierer-Einstellungen
    pub settings: SolverSettings,
}

impl Calculator {
    /// Erstellt einen Rechner mit Standard-Grenzen und -Einstellungen.
    pub fn new(beacons: BeaconLayout, bounds: MapBounds) -> Self {
        Self {
            beacons,
            bounds,
            limits: ValidationLimits::default(),
            settings: SolverSettings::default(),
        }
    }

    /// Ersetzt die Validierungsgrenzen.
    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Ersetzt die Solver-Einstellungen.
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Bestimmt die Position aus vier Distanz-Eingaben.
    pub fn locate<S: AsRef<str>>(&self, inputs: &[S; BEACON_COUNT]) -> Result<DVec2, CalcError> {
        let distances = parse_distance_inputs(inputs, &self.limits)?;
        let report = solve_position(
            &self.beacons.positions(),
            &distances,
            &self.bounds,
            &self.settings,
        )?;
        Ok(report.position)
    }

    /// Berechnet die Distanzen zu allen Baken aus zwei Koordinaten-Eingaben.
    pub fn distances(&self, x: &str, y: &str) -> Result<[f64; BEACON_COUNT], CalcError> {
        let point = parse_coordinate_inputs(x, y, &self.limits)?;
        Ok(calculate_distances(point, &self.beacons.positions()))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(BeaconLayout::standard(), MapBounds::STANDARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InputField, RangeViolation, SolveError};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_locate_origin() {
        let position = Calculator::default()
            .locate(&["0", "8192", "10240", "6144"])
            .expect("gültige Anfrage");
        assert_abs_diff_eq!(position.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(position.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_locate_rejects_before_solving() {
        let err = Calculator::default()
            .locate(&["-1", "8192", "10240", "6144"])
            .unwrap_err();
        assert!(matches!(
            err,
            CalcError::Range {
                field: InputField::Distance(0),
                violation: RangeViolation::BelowMin,
                ..
            }
        ));
    }

    #[test]
    fn test_distances_from_origin() {
        let distances = Calculator::default().distances("0", "0").expect("gültig");
        assert_eq!(distances, [0.0, 8192.0, 10240.0, 6144.0]);
    }

    #[test]
    fn test_distances_reject_large_x() {
        assert!(Calculator::default().distances("8193", "0").is_ok());
        assert!(matches!(
            Calculator::default().distances("8194", "0"),
            Err(CalcError::Range {
                field: InputField::CoordinateX,
                ..
            })
        ));
    }

    #[test]
    fn test_solver_failure_is_reported_as_calc_error() {
        let calculator = Calculator::default().with_settings(SolverSettings {
            max_iterations: 1,
            objective_tolerance: 0.0,
            gradient_tolerance: 0.0,
            ..SolverSettings::default()
        });
        let err = calculator.locate(&["100", "8000", "9000", "6000"]).unwrap_err();
        assert_eq!(
            err,
            CalcError::SolveFailed(SolveError::MaxIterations { iterations: 1 })
        );
    }
}
