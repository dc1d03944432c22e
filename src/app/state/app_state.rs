use std::path::PathBuf;

use crate::app::CommandLog;
use crate::shared::AppOptions;
use scrap_coords_engine::{BeaconLayout, Calculator, MapBounds};

use super::{CoordinatesTabState, DistancesTabState, Tab};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Tab
    pub active_tab: Tab,
    /// Koordinaten-Tab (Distanzen → Position)
    pub coordinates: CoordinatesTabState,
    /// Distanz-Tab (Position → Distanzen)
    pub distances: DistancesTabState,
    /// Feste Baken
    pub beacons: BeaconLayout,
    /// Zulässiger Kartenbereich
    pub bounds: MapBounds,
    /// Laufzeit-Optionen (Sprache, Grenzen, Solver)
    pub options: AppOptions,
    /// Zieldatei beim Speichern der Optionen
    pub options_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    /// Signalisiert dem Host, das Fenster mit der Maus zu verschieben
    pub window_drag_pending: bool,
}

impl AppState {
    /// Erstellt einen neuen State mit Standard-Layout und Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen neuen State mit geladenen Optionen.
    /// Gespeichert wird nach [`AppOptions::config_path`].
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            active_tab: Tab::default(),
            coordinates: CoordinatesTabState::default(),
            distances: DistancesTabState::default(),
            beacons: BeaconLayout::standard(),
            bounds: MapBounds::STANDARD,
            options,
            options_path: AppOptions::config_path(),
            show_options_dialog: false,
            command_log: CommandLog::new(),
            should_exit: false,
            window_drag_pending: false,
        }
    }

    /// Rechner mit Baken, Grenzen und den aktuell gültigen Optionen.
    pub fn calculator(&self) -> Calculator {
        Calculator::new(self.beacons.clone(), self.bounds)
            .with_limits(self.options.validation)
            .with_settings(self.options.solver)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
