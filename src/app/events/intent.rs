use crate::app::state::Tab;
use crate::shared::AppOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// „Koordinaten berechnen“ gedrückt (liest die vier Distanzfelder)
    CalculateCoordinatesRequested,
    /// „Distanzen berechnen“ gedrückt (liest X- und Y-Feld)
    CalculateDistancesRequested,
    /// Anderer Tab gewählt
    TabSelected { tab: Tab },
    /// Titelleiste mit gedrückter Maustaste gezogen
    TitleBarDragStarted,
    /// Anwendung beenden
    ExitRequested,
    /// Optionen-Dialog öffnen
    OptionsRequested,
    /// Optionen-Dialog geschlossen
    OptionsDialogClosed,
    /// Geänderte Optionen übernehmen
    OptionsApplied { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
}
