//! Optionale Bild-Assets. Fehlen sie, wird ohne sie weitergearbeitet.

use std::path::Path;

use crate::shared::options::{CLOSE_ICON_PATH, TITLE_ICON_PATH};

/// Einmal beim Start aufgelöste Bild-URIs der Titelleiste.
#[derive(Debug, Clone, Default)]
pub struct TitleAssets {
    /// Icon links neben dem Titel
    pub title_icon: Option<String>,
    /// Bild des Schließen-Buttons (sonst Text-Kreuz)
    pub close_icon: Option<String>,
}

impl TitleAssets {
    /// Sucht die Standard-Assets relativ zum Arbeitsverzeichnis.
    pub fn discover() -> Self {
        Self {
            title_icon: image_uri(Path::new(TITLE_ICON_PATH)),
            close_icon: image_uri(Path::new(CLOSE_ICON_PATH)),
        }
    }
}

/// `file://`-URI für die egui-Bildlader, falls die Datei existiert.
pub fn image_uri(path: &Path) -> Option<String> {
    if path.is_file() {
        Some(format!("file://{}", path.display()))
    } else {
        log::info!("Asset nicht gefunden, verwende Fallback: {}", path.display());
        None
    }
}

/// Dekodiert das Fenster-Icon. `None`, wenn die Datei fehlt oder defekt ist.
pub fn load_window_icon(path: &Path) -> Option<egui::IconData> {
    let image = match image::open(path) {
        Ok(image) => image.into_rgba8(),
        Err(e) => {
            log::info!("Fenster-Icon nicht geladen ({}): {}", path.display(), e);
            return None;
        }
    };
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}
