//! Textaufbereitung von Ergebnissen und Fehlern für die Anzeige.

use glam::DVec2;
use scrap_coords_engine::{
    BeaconLayout, CalcError, EdgeSide, InputField, RangeViolation, ValidationLimits,
    BEACON_COUNT,
};

use super::locale::{fill, Texts};

/// Position mit zwei Nachkommastellen.
pub fn format_position(texts: &Texts, position: DVec2) -> String {
    fill(
        texts.position_result,
        &[
            ("x", &format!("{:.2}", position.x)),
            ("y", &format!("{:.2}", position.y)),
        ],
    )
}

/// Eine Zeile je Bake, in Baken-Reihenfolge.
pub fn format_distances(
    texts: &Texts,
    beacons: &BeaconLayout,
    distances: &[f64; BEACON_COUNT],
) -> String {
    beacons
        .beacons()
        .iter()
        .zip(distances)
        .enumerate()
        .map(|(i, (beacon, distance))| {
            fill(
                texts.distance_result_line,
                &[
                    ("index", &(i + 1).to_string()),
                    ("color", texts.color_name(beacon.color)),
                    ("distance", &format!("{distance:.2}")),
                ],
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fehlermeldung für den Anwender.
pub fn describe_error(texts: &Texts, limits: &ValidationLimits, error: &CalcError) -> String {
    match error {
        CalcError::Parse { field, .. } if field.is_distance() => {
            texts.error_distance_parse.to_string()
        }
        CalcError::Parse { .. } => texts.error_coordinate_parse.to_string(),
        CalcError::Range {
            field: InputField::Distance(_),
            violation: RangeViolation::BelowMin,
            ..
        } => texts.error_distance_negative.to_string(),
        CalcError::Range {
            field: InputField::Distance(_),
            limit,
            ..
        } => fill(texts.error_distance_too_large, &[("limit", &limit.to_string())]),
        CalcError::Range { .. } => fill(
            texts.error_coordinate_too_large,
            &[
                ("max_x", &limits.max_x.to_string()),
                ("max_y", &limits.max_y.to_string()),
            ],
        ),
        CalcError::SolveFailed(_) => texts.error_solve_failed.to_string(),
    }
}

/// Richtungsanzeige: welche zwei Baken an welchem Kartenrand liegen.
pub fn direction_lines(texts: &Texts, beacons: &BeaconLayout) -> Vec<String> {
    EdgeSide::ALL
        .iter()
        .map(|&side| {
            let [first, second] = beacons.edge_beacons(side);
            fill(
                texts.direction_line,
                &[
                    ("axis", side.label()),
                    ("first", texts.color_name_between(first.color)),
                    ("second", texts.color_name_between(second.color)),
                ],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::{texts, Language};
    use scrap_coords_engine::SolveError;

    fn english() -> &'static Texts {
        texts(Language::English)
    }

    #[test]
    fn test_position_has_two_decimals() {
        let text = format_position(english(), DVec2::new(0.0, 1536.004));
        assert_eq!(text, "x=0.00, y=1536.00");
    }

    #[test]
    fn test_distances_one_line_per_beacon() {
        let text = format_distances(
            english(),
            &BeaconLayout::standard(),
            &[0.0, 8192.0, 10240.0, 6144.0],
        );
        assert_eq!(
            text,
            "Beacon #1 (Red) = 0.00\n\
             Beacon #2 (Green) = 8192.00\n\
             Beacon #3 (Blue) = 10240.00\n\
             Beacon #4 (Yellow) = 6144.00"
        );
    }

    #[test]
    fn test_distance_ceiling_message_names_limit() {
        let limits = ValidationLimits::default();
        let error = CalcError::Range {
            field: InputField::Distance(2),
            value: 10242.0,
            limit: limits.max_distance,
            violation: RangeViolation::AboveMax,
        };
        let text = describe_error(english(), &limits, &error);
        assert!(text.contains("10241"), "{text}");
    }

    #[test]
    fn test_coordinate_message_names_both_ceilings() {
        let limits = ValidationLimits::default();
        let error = CalcError::Range {
            field: InputField::CoordinateY,
            value: 7000.0,
            limit: limits.max_y,
            violation: RangeViolation::AboveMax,
        };
        let text = describe_error(english(), &limits, &error);
        assert!(text.contains("8193") && text.contains("6145"), "{text}");
    }

    #[test]
    fn test_negative_and_parse_messages_differ() {
        let limits = ValidationLimits::default();
        let negative = CalcError::Range {
            field: InputField::Distance(0),
            value: -1.0,
            limit: 0.0,
            violation: RangeViolation::BelowMin,
        };
        let parse = CalcError::Parse {
            field: InputField::Distance(0),
            input: "abc".into(),
        };
        assert_ne!(
            describe_error(english(), &limits, &negative),
            describe_error(english(), &limits, &parse)
        );
    }

    #[test]
    fn test_solve_failure_has_no_partial_result() {
        let error = CalcError::SolveFailed(SolveError::NotFinite);
        let text = describe_error(english(), &ValidationLimits::default(), &error);
        assert_eq!(text, english().error_solve_failed);
    }

    #[test]
    fn test_direction_lines_follow_layout() {
        let lines = direction_lines(english(), &BeaconLayout::standard());
        assert_eq!(
            lines,
            vec![
                "+X - between the green and blue beacon",
                "-X - between the yellow and red beacon",
                "+Y - between the yellow and blue beacon",
                "-Y - between the green and red beacon",
            ]
        );
    }

    #[test]
    fn test_russian_direction_lines_keep_pair_order() {
        let lines = direction_lines(texts(Language::Russian), &BeaconLayout::standard());
        assert_eq!(
            lines,
            vec![
                "+X - Между зелёным и синим маяком",
                "-X - Между жёлтым и красным маяком",
                "+Y - Между жёлтым и синим маяком",
                "-Y - Между зелёным и красным маяком",
            ]
        );
    }

    #[test]
    fn test_russian_position_keeps_prefix() {
        let text = format_position(texts(Language::Russian), DVec2::new(1.0, 2.0));
        assert_eq!(text, "Вычисленные координаты: x=1.00, y=2.00");
    }
}
