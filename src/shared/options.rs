//! Zentrale Konfiguration für ScrapCoords.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use scrap_coords_engine::{SolverSettings, ValidationLimits};
use serde::{Deserialize, Serialize};

use super::locale::Language;

// ── Fenster ─────────────────────────────────────────────────────────

/// Feste Fenstergröße in Punkten.
pub const WINDOW_SIZE: [f32; 2] = [400.0, 600.0];
/// Höhe der eigenen Titelleiste.
pub const TITLE_BAR_HEIGHT: f32 = 30.0;
/// Umbruchbreite für Ergebnis- und Fehlertexte.
pub const RESULT_WRAP_WIDTH: f32 = 350.0;
/// Breite der Eingabefelder.
pub const INPUT_WIDTH: f32 = 200.0;

// ── Assets ──────────────────────────────────────────────────────────

/// Icon in der Titelleiste (optional).
pub const TITLE_ICON_PATH: &str = "textures/icon.png";
/// Schließen-Symbol in der Titelleiste (optional, sonst Text-Kreuz).
pub const CLOSE_ICON_PATH: &str = "textures/close.png";
/// Fenster-Icon des Betriebssystems (optional).
pub const WINDOW_ICON_PATH: &str = "icon.ico";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `scrap_coords.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    /// Sprache aller Oberflächentexte
    #[serde(default)]
    pub language: Language,
    /// Umbruchbreite für Ergebnistexte
    #[serde(default = "default_result_wrap_width")]
    pub result_wrap_width: f32,
    // Tabellen stehen in TOML hinter den einfachen Werten
    /// Plausibilitätsgrenzen für Eingaben
    #[serde(default)]
    pub validation: ValidationLimits,
    /// Einstellungen des Positions-Solvers
    #[serde(default)]
    pub solver: SolverSettings,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            result_wrap_width: RESULT_WRAP_WIDTH,
            validation: ValidationLimits::default(),
            solver: SolverSettings::default(),
        }
    }
}

/// Serde-Default für `result_wrap_width` (Abwärtskompatibilität).
fn default_result_wrap_width() -> f32 {
    RESULT_WRAP_WIDTH
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialisiert die Optionen als TOML-Text.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scrap_coords"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scrap_coords.toml")
    }
}
