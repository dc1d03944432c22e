use scrap_coords_engine::BEACON_COUNT;

use crate::app::state::Tab;
use crate::shared::AppOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Position aus vier rohen Distanz-Eingaben bestimmen
    LocatePosition { inputs: [String; BEACON_COUNT] },
    /// Baken-Distanzen aus rohen Koordinaten-Eingaben berechnen
    ComputeDistances { x: String, y: String },
    /// Aktiven Tab setzen
    SelectTab { tab: Tab },
    /// Host soll das Fenster mit der Maus verschieben
    StartWindowDrag,
    /// Anwendung beenden
    RequestExit,
    /// Optionen-Dialog anzeigen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: AppOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
