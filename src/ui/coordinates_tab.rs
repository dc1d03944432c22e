//! Tab „Koordinaten“: vier Distanzen rein, Position raus.

use crate::app::{AppIntent, AppState};
use crate::shared::options::INPUT_WIDTH;
use crate::shared::{format_position, locale::fill, texts};

use super::{direction_info, result_label, theme};

/// Rendert Richtungsanzeige, vier Distanzfelder, Button und Ergebnis.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let texts = texts(state.options.language);

    direction_info::render(ui, texts, &state.beacons);

    for (i, beacon) in state.beacons.beacons().iter().enumerate() {
        let index = (i + 1).to_string();
        let color = texts.color_name(beacon.color);
        let values = [("index", index.as_str()), ("color", color)];

        ui.label(
            egui::RichText::new(fill(texts.distance_label, &values))
                .color(theme::beacon_color(beacon.color.rgb())),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.coordinates.distance_inputs[i])
                .hint_text(fill(texts.distance_hint, &values))
                .desired_width(INPUT_WIDTH),
        );
        ui.add_space(5.0);
    }

    ui.add_space(5.0);
    if ui.button(texts.calculate_coordinates).clicked() {
        events.push(AppIntent::CalculateCoordinatesRequested);
    }

    result_label::render(
        ui,
        state.coordinates.result.as_ref(),
        texts,
        &state.coordinates.checked_limits,
        state.options.result_wrap_width,
        |position| format_position(texts, *position),
    );

    events
}
