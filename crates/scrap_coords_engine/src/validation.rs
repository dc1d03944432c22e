//! Eingabevalidierung für Distanz- und Koordinatenfelder.
//!
//! Reihenfolge wie in der Oberfläche erwartet: erst werden alle Felder geparst,
//! danach die Obergrenzen geprüft, zuletzt Vorzeichen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::beacon::BEACON_COUNT;
use crate::error::{CalcError, InputField, RangeViolation};

/// Standard-Obergrenze für Distanzen (Kartendiagonale 10240 plus Toleranz).
pub const MAX_DISTANCE: f64 = 10241.0;
/// Standard-Obergrenze für X-Koordinaten.
pub const MAX_COORDINATE_X: f64 = 8193.0;
/// Standard-Obergrenze für Y-Koordinaten.
pub const MAX_COORDINATE_Y: f64 = 6145.0;

/// Konfigurierbare Plausibilitätsgrenzen für Benutzereingaben.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Größte zulässige Distanz (inklusive)
    pub max_distance: f64,
    /// Größte zulässige X-Koordinate (inklusive)
    pub max_x: f64,
    /// Größte zulässige Y-Koordinate (inklusive)
    pub max_y: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_distance: MAX_DISTANCE,
            max_x: MAX_COORDINATE_X,
            max_y: MAX_COORDINATE_Y,
        }
    }
}

fn parse_number(field: InputField, raw: &str) -> Result<f64, CalcError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse {
            field,
            input: raw.to_string(),
        }),
    }
}

/// Parst und prüft die vier Distanzfelder.
///
/// Abgelehnt wird jede Distanz `> max_distance` oder `< 0`.
pub fn parse_distance_inputs<S: AsRef<str>>(
    inputs: &[S; BEACON_COUNT],
    limits: &ValidationLimits,
) -> Result<[f64; BEACON_COUNT], CalcError> {
    let mut distances = [0.0; BEACON_COUNT];
    for (index, (slot, raw)) in distances.iter_mut().zip(inputs).enumerate() {
        *slot = parse_number(InputField::Distance(index), raw.as_ref())?;
    }

    if let Some((index, &value)) = distances
        .iter()
        .enumerate()
        .find(|(_, d)| **d > limits.max_distance)
    {
        return Err(CalcError::Range {
            field: InputField::Distance(index),
            value,
            limit: limits.max_distance,
            violation: RangeViolation::AboveMax,
        });
    }

    if let Some((index, &value)) = distances.iter().enumerate().find(|(_, d)| **d < 0.0) {
        return Err(CalcError::Range {
            field: InputField::Distance(index),
            value,
            limit: 0.0,
            violation: RangeViolation::BelowMin,
        });
    }

    Ok(distances)
}

/// Parst und prüft ein Koordinatenpaar.
///
/// Nur die Obergrenzen werden geprüft; negative Koordinaten sind zulässig.
pub fn parse_coordinate_inputs(
    x: &str,
    y: &str,
    limits: &ValidationLimits,
) -> Result<DVec2, CalcError> {
    let x = parse_number(InputField::CoordinateX, x)?;
    let y = parse_number(InputField::CoordinateY, y)?;

    if x > limits.max_x {
        return Err(CalcError::Range {
            field: InputField::CoordinateX,
            value: x,
            limit: limits.max_x,
            violation: RangeViolation::AboveMax,
        });
    }
    if y > limits.max_y {
        return Err(CalcError::Range {
            field: InputField::CoordinateY,
            value: y,
            limit: limits.max_y,
            violation: RangeViolation::AboveMax,
        });
    }

    Ok(DVec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    #[test]
    fn test_valid_distances_are_parsed() {
        let parsed = parse_distance_inputs(&["0", " 8192 ", "10240.5", "6144"], &limits())
            .expect("gültige Distanzen");
        assert_eq!(parsed, [0.0, 8192.0, 10240.5, 6144.0]);
    }

    #[test]
    fn test_non_numeric_distance_is_parse_error() {
        let err = parse_distance_inputs(&["1", "abc", "3", "4"], &limits()).unwrap_err();
        assert_eq!(
            err,
            CalcError::Parse {
                field: InputField::Distance(1),
                input: "abc".into(),
            }
        );
    }

    #[test]
    fn test_empty_and_non_finite_inputs_are_rejected() {
        for raw in ["", "   ", "nan", "inf", "-infinity"] {
            let err = parse_distance_inputs(&[raw, "1", "1", "1"], &limits()).unwrap_err();
            assert!(matches!(err, CalcError::Parse { .. }), "{raw:?} -> {err:?}");
        }
    }

    #[test]
    fn test_negative_distance_is_rejected() {
        let err = parse_distance_inputs(&["1", "2", "-1", "4"], &limits()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Range {
                field: InputField::Distance(2),
                violation: RangeViolation::BelowMin,
                ..
            }
        ));
    }

    #[test]
    fn test_distance_ceiling_is_inclusive() {
        assert!(parse_distance_inputs(&["10241", "0", "0", "0"], &limits()).is_ok());

        let err = parse_distance_inputs(&["10242", "0", "0", "0"], &limits()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Range {
                violation: RangeViolation::AboveMax,
                ..
            }
        ));
    }

    #[test]
    fn test_ceiling_is_checked_before_sign() {
        let err = parse_distance_inputs(&["-1", "20000", "0", "0"], &limits()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Range {
                field: InputField::Distance(1),
                violation: RangeViolation::AboveMax,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_errors_win_over_range_errors() {
        let err = parse_distance_inputs(&["99999", "x", "0", "0"], &limits()).unwrap_err();
        assert!(matches!(err, CalcError::Parse { .. }));
    }

    #[test]
    fn test_coordinate_ceilings() {
        assert!(parse_coordinate_inputs("8193", "6145", &limits()).is_ok());

        let err = parse_coordinate_inputs("8194", "0", &limits()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Range {
                field: InputField::CoordinateX,
                ..
            }
        ));

        let err = parse_coordinate_inputs("0", "6146", &limits()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Range {
                field: InputField::CoordinateY,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_coordinates_are_accepted() {
        let point = parse_coordinate_inputs("-10", "-0.5", &limits()).expect("negativ erlaubt");
        assert_eq!(point, DVec2::new(-10.0, -0.5));
    }

    #[test]
    fn test_custom_limits_from_toml() {
        let limits: ValidationLimits = toml::from_str("max_distance = 10240.0").expect("toml");
        assert_eq!(limits.max_distance, 10240.0);
        assert_eq!(limits.max_x, MAX_COORDINATE_X);
        assert!(parse_distance_inputs(&["10241", "0", "0", "0"], &limits).is_err());
    }
}
