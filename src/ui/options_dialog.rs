//! Optionen-Dialog für Sprache, Eingabegrenzen und Solver.

use crate::app::{AppIntent, AppState};
use crate::shared::{texts, Language};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    let texts = texts(state.options.language);
    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new(texts.options_title)
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(texts.options_language);
                egui::ComboBox::from_id_salt("options_language")
                    .selected_text(opts.language.native_name())
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            changed |= ui
                                .selectable_value(&mut opts.language, language, language.native_name())
                                .changed();
                        }
                    });
            });

            // ── Eingabegrenzen ──────────────────────────────────
            ui.collapsing(texts.options_limits, |ui| {
                changed |= limit_edit(ui, texts.options_max_distance, &mut opts.validation.max_distance);
                changed |= limit_edit(ui, texts.options_max_x, &mut opts.validation.max_x);
                changed |= limit_edit(ui, texts.options_max_y, &mut opts.validation.max_y);
            });

            // ── Solver ──────────────────────────────────────────
            ui.collapsing(texts.options_solver, |ui| {
                changed |= tolerance_edit(
                    ui,
                    texts.options_objective_tolerance,
                    &mut opts.solver.objective_tolerance,
                );
                changed |= tolerance_edit(
                    ui,
                    texts.options_gradient_tolerance,
                    &mut opts.solver.gradient_tolerance,
                );
                ui.horizontal(|ui| {
                    ui.label(texts.options_max_iterations);
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.solver.max_iterations)
                                .range(1..=1_000_000)
                                .speed(100.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label(texts.options_history_size);
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.solver.history_size).range(1..=50))
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button(texts.options_reset).clicked() {
                    events.push(AppIntent::OptionsResetRequested);
                }
                if ui.button(texts.options_close).clicked() {
                    events.push(AppIntent::OptionsDialogClosed);
                }
            });
        });

    // Änderungen sofort anwenden
    if changed {
        events.push(AppIntent::OptionsApplied { options: opts });
    }

    events
}

/// Obergrenze in Karteneinheiten.
fn limit_edit(ui: &mut egui::Ui, label: &str, value: &mut f64) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(0.0..=100_000.0).speed(1.0))
            .changed()
    })
    .inner
}

/// Toleranz in wissenschaftlicher Schreibweise.
fn tolerance_edit(ui: &mut egui::Ui, label: &str, value: &mut f64) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .range(0.0..=1.0)
                .speed(1e-10)
                .custom_formatter(|v, _| format!("{v:e}"))
                .custom_parser(|s| s.trim().parse().ok()),
        )
        .changed()
    })
    .inner
}
