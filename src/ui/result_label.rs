//! Umbrechendes Ergebnis-Label unter den Rechen-Buttons.

use scrap_coords_engine::{CalcError, ValidationLimits};

use crate::shared::{describe_error, Texts};

/// Zeigt ein Ergebnis oder dessen Fehlertext; ohne Ergebnis bleibt die Fläche leer.
pub fn render<T>(
    ui: &mut egui::Ui,
    result: Option<&Result<T, CalcError>>,
    texts: &Texts,
    limits: &ValidationLimits,
    wrap_width: f32,
    format_ok: impl FnOnce(&T) -> String,
) {
    let Some(result) = result else {
        return;
    };
    let text = match result {
        Ok(value) => format_ok(value),
        Err(e) => describe_error(texts, limits, e),
    };

    ui.add_space(10.0);
    ui.scope(|ui| {
        ui.set_max_width(wrap_width);
        ui.add(egui::Label::new(text).wrap());
    });
}
