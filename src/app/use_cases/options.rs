//! Use-Case: Laufzeit-Optionen übernehmen und persistieren.

use crate::app::AppState;
use crate::shared::AppOptions;

/// Übernimmt neue Optionen und speichert sie nach `state.options_path`.
///
/// Bereits angezeigte Ergebnisse bleiben erhalten; sie werden beim
/// nächsten Frame in der neuen Sprache formatiert.
pub fn apply_options(state: &mut AppState, options: AppOptions) -> anyhow::Result<()> {
    if options.language != state.options.language {
        log::info!("Sprache gewechselt: {:?}", options.language);
    }
    state.options = options;
    state.options.save_to_file(&state.options_path)
}

/// Setzt alle Optionen auf Standardwerte zurück und speichert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, AppOptions::default())
}
