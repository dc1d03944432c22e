//! Fehlertypen des Rechenkerns.

use std::fmt;

use thiserror::Error;

/// Eingabefeld, auf das sich ein Validierungsfehler bezieht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Distanz zur Bake mit diesem Index (0-basiert)
    Distance(usize),
    /// X-Koordinate
    CoordinateX,
    /// Y-Koordinate
    CoordinateY,
}

impl InputField {
    /// `true` für Distanzfelder.
    pub fn is_distance(self) -> bool {
        matches!(self, InputField::Distance(_))
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Distance(index) => write!(f, "Distanz #{}", index + 1),
            InputField::CoordinateX => write!(f, "X"),
            InputField::CoordinateY => write!(f, "Y"),
        }
    }
}

/// Art der Bereichsverletzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    /// Wert größer als die Obergrenze
    AboveMax,
    /// Wert kleiner als die Untergrenze
    BelowMin,
}

/// Diagnose des Minimierers, wenn keine Konvergenz erreicht wurde.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Iterationslimit erreicht
    #[error("Iterationslimit erreicht ({iterations} Iterationen)")]
    MaxIterations {
        /// Durchgeführte Iterationen
        iterations: usize,
    },
    /// Liniensuche fand auch nach Zurücksetzen des Verlaufs keinen Abstieg
    #[error("Liniensuche fehlgeschlagen in Iteration {iteration} (f = {objective:e})")]
    LineSearchFailed {
        /// Iteration, in der die Suche abbrach
        iteration: usize,
        /// Letzter akzeptierter Zielfunktionswert
        objective: f64,
    },
    /// Zielfunktion oder Gradient nicht endlich
    #[error("Zielfunktion nicht endlich (NaN oder Unendlich)")]
    NotFinite,
}

/// Fehler einer Berechnungsanfrage. Keiner davon ist fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Eingabe ist keine (endliche) Zahl
    #[error("Ungültige Zahl im Feld {field}: {input:?}")]
    Parse {
        /// Betroffenes Feld
        field: InputField,
        /// Rohe Eingabe
        input: String,
    },
    /// Wert außerhalb der zulässigen Grenzen
    #[error("Wert {value} im Feld {field} außerhalb der Grenze {limit} ({violation:?})")]
    Range {
        /// Betroffenes Feld
        field: InputField,
        /// Geparster Wert
        value: f64,
        /// Verletzte Grenze
        limit: f64,
        /// Richtung der Verletzung
        violation: RangeViolation,
    },
    /// Minimierer hat nicht konvergiert
    #[error("Positionsbestimmung fehlgeschlagen: {0}")]
    SolveFailed(#[from] SolveError),
}
