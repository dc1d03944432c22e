//! Dunkles Farbschema der Anwendung.

use egui::Color32;

/// Hintergrund der Panels
pub const BG_COLOR: Color32 = Color32::from_rgb(0x29, 0x28, 0x2a);
/// Titelleiste und Buttons
pub const MENU_COLOR: Color32 = Color32::from_rgb(0x21, 0x20, 0x22);
/// Rahmen
pub const BORDER_COLOR: Color32 = Color32::from_rgb(0x2b, 0x2e, 0x31);
/// Text
pub const TEXT_COLOR: Color32 = Color32::WHITE;
/// Hintergrund der Eingabefelder
pub const ENTRY_BG_COLOR: Color32 = Color32::from_rgb(0x30, 0x2e, 0x2f);
/// Rahmen der Eingabefelder
pub const ENTRY_BORDER_COLOR: Color32 = Color32::from_rgb(0x44, 0x43, 0x45);
/// Hover-Hintergrund der Titelleisten-Buttons
pub const HOVER_COLOR: Color32 = Color32::from_rgb(0x50, 0x50, 0x50);

/// Setzt die Visuals des Kontexts auf das Farbschema.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(TEXT_COLOR);
    visuals.panel_fill = BG_COLOR;
    visuals.window_fill = BG_COLOR;
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER_COLOR);
    visuals.extreme_bg_color = ENTRY_BG_COLOR;

    visuals.widgets.inactive.weak_bg_fill = MENU_COLOR;
    visuals.widgets.inactive.bg_fill = MENU_COLOR;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, ENTRY_BORDER_COLOR);
    visuals.widgets.hovered.weak_bg_fill = HOVER_COLOR;
    visuals.widgets.hovered.bg_fill = HOVER_COLOR;
    visuals.widgets.active.weak_bg_fill = HOVER_COLOR;

    ctx.set_visuals(visuals);
}

/// Anzeigefarbe einer Bake.
pub fn beacon_color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}
