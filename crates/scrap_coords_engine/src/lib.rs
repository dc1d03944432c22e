//! ScrapCoords Engine.
//!
//! Rechenkern ohne UI-Abhängigkeiten: Baken-Layout, Kartengrenzen,
//! Distanzberechnung, Eingabevalidierung und der begrenzte Positions-Solver.

pub mod beacon;
pub mod bounds;
pub mod calculator;
pub mod distance;
pub mod error;
pub mod solver;
pub mod validation;

pub use beacon::{Beacon, BeaconColor, BeaconLayout, EdgeSide, BEACON_COUNT};
pub use bounds::MapBounds;
pub use calculator::Calculator;
pub use distance::calculate_distances;
pub use error::{CalcError, InputField, RangeViolation, SolveError};
pub use solver::{
    calculate_position_2d, solve_position, ResidualObjective, SolveReport, SolverSettings,
    Termination,
};
pub use validation::{parse_coordinate_inputs, parse_distance_inputs, ValidationLimits};
