use scrap_coords_engine::BeaconLayout;

use crate::shared::{direction_lines, Texts};

/// Zeigt an, zwischen welchen Baken die Kartenränder liegen.
pub fn render(ui: &mut egui::Ui, texts: &Texts, beacons: &BeaconLayout) {
    ui.add_space(10.0);
    ui.label(direction_lines(texts, beacons).join("\n"));
    ui.add_space(10.0);
}
