//! Handler für Fenstersteuerung: Tabs, Verschieben, Beenden.

use crate::app::{AppState, Tab};

/// Setzt den aktiven Tab.
pub fn select_tab(state: &mut AppState, tab: Tab) {
    state.active_tab = tab;
}

/// Merkt einen Fenster-Drag vor; der Host sendet ihn an den Viewport.
pub fn start_window_drag(state: &mut AppState) {
    state.window_drag_pending = true;
}

/// Fordert ein kontrolliertes Beenden an.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
