//! Tab „Distanzen“: Position rein, vier Distanzen raus.

use crate::app::{AppIntent, AppState};
use crate::shared::options::INPUT_WIDTH;
use crate::shared::{format_distances, texts};

use super::{direction_info, result_label};

/// Rendert Richtungsanzeige, X/Y-Felder, Button und Ergebnis.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let texts = texts(state.options.language);

    direction_info::render(ui, texts, &state.beacons);

    ui.label(texts.coordinate_x_label);
    ui.add(
        egui::TextEdit::singleline(&mut state.distances.x_input)
            .hint_text(texts.coordinate_x_hint)
            .desired_width(INPUT_WIDTH),
    );
    ui.add_space(5.0);

    ui.label(texts.coordinate_y_label);
    ui.add(
        egui::TextEdit::singleline(&mut state.distances.y_input)
            .hint_text(texts.coordinate_y_hint)
            .desired_width(INPUT_WIDTH),
    );
    ui.add_space(10.0);

    if ui.button(texts.calculate_distances).clicked() {
        events.push(AppIntent::CalculateDistancesRequested);
    }

    let beacons = &state.beacons;
    result_label::render(
        ui,
        state.distances.result.as_ref(),
        texts,
        &state.distances.checked_limits,
        state.options.result_wrap_width,
        |distances| format_distances(texts, beacons, distances),
    );

    events
}
