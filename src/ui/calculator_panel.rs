//! Hauptfläche unter der Titelleiste: Tab-Leiste und aktiver Tab.

use crate::app::{AppIntent, AppState, Tab};
use crate::shared::texts;

use super::{coordinates_tab, distances_tab};

/// Rendert die Tab-Leiste und den Inhalt des aktiven Tabs.
pub fn render_calculator_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let texts = texts(state.options.language);

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(super::theme::BG_COLOR)
                .inner_margin(egui::Margin::same(10)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    for tab in Tab::ALL {
                        let label = match tab {
                            Tab::Coordinates => texts.tab_coordinates,
                            Tab::Distances => texts.tab_distances,
                        };
                        let selected = state.active_tab == tab;
                        if ui.selectable_label(selected, label).clicked() && !selected {
                            events.push(AppIntent::TabSelected { tab });
                        }
                    }
                });
                ui.separator();

                events.extend(match state.active_tab {
                    Tab::Coordinates => coordinates_tab::render(ui, state),
                    Tab::Distances => distances_tab::render(ui, state),
                });
            });
        });

    events
}
