use approx::assert_abs_diff_eq;
use glam::DVec2;
use scrap_coords::engine::{CalcError, InputField, RangeViolation};
use scrap_coords::shared::{describe_error, format_position, texts};
use scrap_coords::{AppCommand, AppController, AppIntent, AppOptions, AppState, Language, Tab};

/// State, dessen Optionen in eine eigene Temp-Datei gespeichert werden.
fn state_with_temp_options(name: &str) -> AppState {
    let mut state = AppState::new();
    state.options_path = std::env::temp_dir().join(format!("scrap_coords_{name}.toml"));
    state
}

fn state_with_distances(inputs: [&str; 4]) -> AppState {
    let mut state = AppState::new();
    state.coordinates.distance_inputs = inputs.map(String::from);
    state
}

fn state_with_coordinates(x: &str, y: &str) -> AppState {
    let mut state = AppState::new();
    state.distances.x_input = x.into();
    state.distances.y_input = y.into();
    state
}

fn calculate_coordinates(state: &mut AppState) {
    AppController::new()
        .handle_intent(state, AppIntent::CalculateCoordinatesRequested)
        .expect("Berechnung sollte ohne Fehler durchlaufen");
}

fn calculate_distances(state: &mut AppState) {
    AppController::new()
        .handle_intent(state, AppIntent::CalculateDistancesRequested)
        .expect("Berechnung sollte ohne Fehler durchlaufen");
}

#[test]
fn test_coordinates_from_origin_distances() {
    let mut state = state_with_distances(["0", "8192", "10240", "6144"]);

    calculate_coordinates(&mut state);

    let position = match &state.coordinates.result {
        Some(Ok(position)) => *position,
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    };
    assert_abs_diff_eq!(position.x, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(position.y, 0.0, epsilon = 1e-3);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::LocatePosition { .. })
    ));
}

#[test]
fn test_non_numeric_distance_is_reported_inline() {
    let mut state = state_with_distances(["abc", "8192", "10240", "6144"]);

    calculate_coordinates(&mut state);

    assert!(matches!(
        state.coordinates.result,
        Some(Err(CalcError::Parse {
            field: InputField::Distance(0),
            ..
        }))
    ));
}

#[test]
fn test_negative_distance_is_rejected() {
    let mut state = state_with_distances(["-1", "8192", "10240", "6144"]);

    calculate_coordinates(&mut state);

    assert!(matches!(
        state.coordinates.result,
        Some(Err(CalcError::Range {
            violation: RangeViolation::BelowMin,
            ..
        }))
    ));
}

#[test]
fn test_distance_ceiling_is_inclusive() {
    let mut rejected = state_with_distances(["10242", "8192", "10240", "6144"]);
    calculate_coordinates(&mut rejected);
    assert!(matches!(
        rejected.coordinates.result,
        Some(Err(CalcError::Range {
            field: InputField::Distance(0),
            violation: RangeViolation::AboveMax,
            ..
        }))
    ));

    let mut accepted = state_with_distances(["10241", "8192", "10240", "6144"]);
    calculate_coordinates(&mut accepted);
    assert!(matches!(accepted.coordinates.result, Some(Ok(_))));
}

#[test]
fn test_distances_from_origin() {
    let mut state = state_with_coordinates("0", "0");

    calculate_distances(&mut state);

    match &state.distances.result {
        Some(Ok(distances)) => assert_eq!(*distances, [0.0, 8192.0, 10240.0, 6144.0]),
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_coordinate_ceiling_is_inclusive() {
    let mut rejected = state_with_coordinates("8194", "0");
    calculate_distances(&mut rejected);
    assert!(matches!(
        rejected.distances.result,
        Some(Err(CalcError::Range {
            field: InputField::CoordinateX,
            ..
        }))
    ));

    let mut accepted = state_with_coordinates("8193", "0");
    calculate_distances(&mut accepted);
    assert!(matches!(accepted.distances.result, Some(Ok(_))));
}

#[test]
fn test_calculations_keep_tabs_independent() {
    let mut state = state_with_coordinates("100", "200");
    state.coordinates.distance_inputs = ["x", "", "", ""].map(String::from);

    calculate_distances(&mut state);

    assert!(state.coordinates.result.is_none());
    assert!(matches!(state.distances.result, Some(Ok(_))));
}

#[test]
fn test_tab_selection_and_window_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.active_tab, Tab::Coordinates);

    controller
        .handle_intent(
            &mut state,
            AppIntent::TabSelected {
                tab: Tab::Distances,
            },
        )
        .expect("Tab-Wechsel sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::TitleBarDragStarted)
        .expect("Drag sollte ohne Fehler durchlaufen");

    assert_eq!(state.active_tab, Tab::Distances);
    assert!(state.window_drag_pending);
    assert!(!state.should_exit);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_dialog_open_apply_close() {
    let mut controller = AppController::new();
    let mut state = state_with_temp_options("dialog_flow");

    controller
        .handle_intent(&mut state, AppIntent::OptionsRequested)
        .expect("Dialog sollte sich öffnen");
    assert!(state.show_options_dialog);

    let mut options = AppOptions::default();
    options.language = Language::German;
    options.validation.max_distance = 20000.0;
    controller
        .handle_intent(&mut state, AppIntent::OptionsApplied { options })
        .expect("Optionen sollten übernommen werden");
    assert_eq!(state.options.language, Language::German);

    // neue Obergrenze gilt sofort für die nächste Berechnung
    state.coordinates.distance_inputs = ["15000", "8192", "10240", "6144"].map(String::from);
    calculate_coordinates(&mut state);
    assert!(!matches!(
        state.coordinates.result,
        Some(Err(CalcError::Range { .. }))
    ));

    controller
        .handle_intent(&mut state, AppIntent::OptionsDialogClosed)
        .expect("Dialog sollte sich schließen");
    assert!(!state.show_options_dialog);

    let saved = AppOptions::load_from_file(&state.options_path);
    assert_eq!(saved.language, Language::German);
    let _ = std::fs::remove_file(&state.options_path);
}

#[test]
fn test_language_switch_relocalizes_existing_result() {
    let mut controller = AppController::new();
    let mut state = state_with_temp_options("relocalize");
    state.coordinates.result = Some(Ok(DVec2::new(1.0, 2.0)));

    let mut options = AppOptions::default();
    options.language = Language::German;
    controller
        .handle_intent(&mut state, AppIntent::OptionsApplied { options })
        .expect("Optionen sollten übernommen werden");

    let Some(Ok(position)) = &state.coordinates.result else {
        panic!("Ergebnis sollte erhalten bleiben");
    };
    assert_eq!(
        format_position(texts(state.options.language), *position),
        "Berechnete Koordinaten: x=1.00, y=2.00"
    );
    let _ = std::fs::remove_file(&state.options_path);
}

#[test]
fn test_coordinate_error_keeps_limits_of_its_check() {
    let mut controller = AppController::new();
    let mut state = state_with_temp_options("checked_limits");
    state.distances.x_input = "8194".into();
    state.distances.y_input = "0".into();
    calculate_distances(&mut state);

    let mut options = AppOptions::default();
    options.validation.max_x = 9000.0;
    options.validation.max_y = 7000.0;
    controller
        .handle_intent(&mut state, AppIntent::OptionsApplied { options })
        .expect("Optionen sollten übernommen werden");

    let Some(Err(error)) = &state.distances.result else {
        panic!("Fehler sollte erhalten bleiben");
    };
    let text = describe_error(
        texts(state.options.language),
        &state.distances.checked_limits,
        error,
    );
    assert!(text.contains("8193") && text.contains("6145"), "{text}");
    let _ = std::fs::remove_file(&state.options_path);
}
