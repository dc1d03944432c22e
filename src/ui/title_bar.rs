//! Eigene Titelleiste für das rahmenlose Fenster.

use crate::app::{AppIntent, AppState};
use crate::shared::options::TITLE_BAR_HEIGHT;
use crate::shared::texts;

use super::assets::TitleAssets;
use super::theme;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(30.0, 30.0);

/// Rendert Icon, Titel, Optionen- und Schließen-Button.
/// Ziehen auf der freien Fläche verschiebt das Fenster.
pub fn render_title_bar(
    ctx: &egui::Context,
    state: &AppState,
    assets: &TitleAssets,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let texts = texts(state.options.language);

    egui::TopBottomPanel::top("title_bar")
        .exact_height(TITLE_BAR_HEIGHT)
        .frame(egui::Frame::NONE.fill(theme::MENU_COLOR))
        .show(ctx, |ui| {
            // Fläche zuerst registrieren, damit Buttons darüber Vorrang haben
            let drag_area = ui.interact(
                ui.max_rect(),
                ui.id().with("title_bar_drag"),
                egui::Sense::click_and_drag(),
            );
            if drag_area.drag_started_by(egui::PointerButton::Primary) {
                events.push(AppIntent::TitleBarDragStarted);
            }

            ui.horizontal_centered(|ui| {
                ui.add_space(10.0);
                if let Some(uri) = &assets.title_icon {
                    ui.add(egui::Image::new(uri.as_str()).fit_to_exact_size(egui::vec2(20.0, 20.0)));
                    ui.add_space(4.0);
                }
                ui.label(egui::RichText::new(texts.app_title).color(theme::TEXT_COLOR));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = match &assets.close_icon {
                        Some(uri) => ui.add(
                            egui::Button::image(
                                egui::Image::new(uri.as_str())
                                    .fit_to_exact_size(egui::vec2(16.0, 16.0)),
                            )
                            .frame(false)
                            .min_size(BUTTON_SIZE),
                        ),
                        None => ui.add(egui::Button::new("X").frame(false).min_size(BUTTON_SIZE)),
                    };
                    if close.on_hover_text(texts.close_tooltip).clicked() {
                        events.push(AppIntent::ExitRequested);
                    }

                    let options = ui
                        .add(egui::Button::new("⚙").frame(false).min_size(BUTTON_SIZE))
                        .on_hover_text(texts.options_tooltip);
                    if options.clicked() {
                        events.push(AppIntent::OptionsRequested);
                    }
                });
            });
        });

    events
}
