//! UI-Komponenten: Titelleiste, Tabs, Rechner-Panels, Optionen-Dialog.

pub mod assets;
mod calculator_panel;
mod coordinates_tab;
mod direction_info;
mod distances_tab;
pub mod options_dialog;
mod result_label;
/// UI-Layer mit egui
///
/// Komponenten lesen den `AppState`, ändern höchstens rohe Eingabetexte
/// und melden alles Weitere als `AppIntent`.
pub mod theme;
pub mod title_bar;

pub use assets::{load_window_icon, TitleAssets};
pub use calculator_panel::render_calculator_panel;
pub use options_dialog::show_options_dialog;
pub use title_bar::render_title_bar;
