//! Lokalisierte Oberflächentexte.
//!
//! Alle sichtbaren Strings kommen aus einem `Texts`-Katalog. Platzhalter in
//! geschweiften Klammern (`{index}`, `{limit}`, …) werden über [`fill`] ersetzt.

use scrap_coords_engine::BeaconColor;
use serde::{Deserialize, Serialize};

/// Anzeigesprache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Englisch
    #[default]
    English,
    /// Deutsch
    German,
    /// Russisch
    Russian,
}

impl Language {
    /// Alle Sprachen für Auswahl-Widgets.
    pub const ALL: [Language; 3] = [Language::English, Language::German, Language::Russian];

    /// Name der Sprache in der Sprache selbst.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
            Language::Russian => "Русский",
        }
    }
}

/// Textkatalog einer Sprache.
#[derive(Debug)]
pub struct Texts {
    /// Fenstertitel
    pub app_title: &'static str,
    /// Tab: Koordinaten aus Distanzen
    pub tab_coordinates: &'static str,
    /// Tab: Distanzen aus Koordinaten
    pub tab_distances: &'static str,
    /// Farbnamen (Nominativ), Baken-Reihenfolge
    pub color_names: [&'static str; 4],
    /// Farbnamen für die Richtungsanzeige („zwischen … und …“)
    pub color_names_between: [&'static str; 4],
    /// `{axis}`, `{first}`, `{second}`
    pub direction_line: &'static str,
    /// `{index}`, `{color}`
    pub distance_label: &'static str,
    /// `{index}`, `{color}`
    pub distance_hint: &'static str,
    /// Beschriftung X-Feld
    pub coordinate_x_label: &'static str,
    /// Platzhalter X-Feld
    pub coordinate_x_hint: &'static str,
    /// Beschriftung Y-Feld
    pub coordinate_y_label: &'static str,
    /// Platzhalter Y-Feld
    pub coordinate_y_hint: &'static str,
    /// Button: Koordinaten berechnen
    pub calculate_coordinates: &'static str,
    /// Button: Distanzen berechnen
    pub calculate_distances: &'static str,
    /// `{x}`, `{y}`
    pub position_result: &'static str,
    /// `{index}`, `{color}`, `{distance}`
    pub distance_result_line: &'static str,
    /// Nicht-numerische Distanz
    pub error_distance_parse: &'static str,
    /// `{limit}`
    pub error_distance_too_large: &'static str,
    /// Negative Distanz
    pub error_distance_negative: &'static str,
    /// Nicht-numerische Koordinate
    pub error_coordinate_parse: &'static str,
    /// `{max_x}`, `{max_y}`
    pub error_coordinate_too_large: &'static str,
    /// Solver ohne Konvergenz
    pub error_solve_failed: &'static str,
    /// Tooltip Schließen-Button
    pub close_tooltip: &'static str,
    /// Tooltip Optionen-Button
    pub options_tooltip: &'static str,
    /// Titel des Optionen-Dialogs
    pub options_title: &'static str,
    /// Optionen: Sprache
    pub options_language: &'static str,
    /// Optionen: Abschnitt Eingabegrenzen
    pub options_limits: &'static str,
    /// Optionen: maximale Distanz
    pub options_max_distance: &'static str,
    /// Optionen: maximales X
    pub options_max_x: &'static str,
    /// Optionen: maximales Y
    pub options_max_y: &'static str,
    /// Optionen: Abschnitt Solver
    pub options_solver: &'static str,
    /// Optionen: Toleranz Zielfunktion
    pub options_objective_tolerance: &'static str,
    /// Optionen: Toleranz Gradient
    pub options_gradient_tolerance: &'static str,
    /// Optionen: Iterationslimit
    pub options_max_iterations: &'static str,
    /// Optionen: Verlaufslänge
    pub options_history_size: &'static str,
    /// Button: Standardwerte
    pub options_reset: &'static str,
    /// Button: Schließen
    pub options_close: &'static str,
}

static ENGLISH: Texts = Texts {
    app_title: "ScrapCoords",
    tab_coordinates: "Coordinates",
    tab_distances: "Distances",
    color_names: ["Red", "Green", "Blue", "Yellow"],
    color_names_between: ["red", "green", "blue", "yellow"],
    direction_line: "{axis} - between the {first} and {second} beacon",
    distance_label: "Distance to beacon #{index} ({color}):",
    distance_hint: "Distance to beacon #{index} ({color})",
    coordinate_x_label: "X coordinate:",
    coordinate_x_hint: "Enter the X coordinate",
    coordinate_y_label: "Y coordinate:",
    coordinate_y_hint: "Enter the Y coordinate",
    calculate_coordinates: "Calculate coordinates",
    calculate_distances: "Calculate distances",
    position_result: "x={x}, y={y}",
    distance_result_line: "Beacon #{index} ({color}) = {distance}",
    error_distance_parse: "Error: enter numbers in the distance fields.",
    error_distance_too_large: "Error: beacon distances entered incorrectly, values too large (> {limit}).",
    error_distance_negative: "Error: distances must be non-negative.",
    error_coordinate_parse: "Error: enter numbers in the coordinate fields.",
    error_coordinate_too_large: "Error: X and Y coordinates cannot exceed {max_x} and {max_y} respectively.",
    error_solve_failed: "Failed to calculate the coordinates.",
    close_tooltip: "Close",
    options_tooltip: "Options",
    options_title: "Options",
    options_language: "Language:",
    options_limits: "Input limits",
    options_max_distance: "Max. distance:",
    options_max_x: "Max. X:",
    options_max_y: "Max. Y:",
    options_solver: "Solver",
    options_objective_tolerance: "Objective tolerance:",
    options_gradient_tolerance: "Gradient tolerance:",
    options_max_iterations: "Max. iterations:",
    options_history_size: "History pairs:",
    options_reset: "Defaults",
    options_close: "Close",
};

static GERMAN: Texts = Texts {
    app_title: "ScrapCoords",
    tab_coordinates: "Koordinaten",
    tab_distances: "Distanzen",
    color_names: ["Rot", "Grün", "Blau", "Gelb"],
    color_names_between: ["roten", "grünen", "blauen", "gelben"],
    direction_line: "{axis} - zwischen der {first} und {second} Bake",
    distance_label: "Distanz zu Bake #{index} ({color}):",
    distance_hint: "Distanz zu Bake #{index} ({color})",
    coordinate_x_label: "X-Koordinate:",
    coordinate_x_hint: "X-Koordinate eingeben",
    coordinate_y_label: "Y-Koordinate:",
    coordinate_y_hint: "Y-Koordinate eingeben",
    calculate_coordinates: "Koordinaten berechnen",
    calculate_distances: "Distanzen berechnen",
    position_result: "Berechnete Koordinaten: x={x}, y={y}",
    distance_result_line: "Bake #{index} ({color}) = {distance}",
    error_distance_parse: "Fehler: Bitte Zahlen in die Distanzfelder eingeben.",
    error_distance_too_large: "Fehler: Distanzen falsch eingegeben, Werte zu groß (> {limit}).",
    error_distance_negative: "Fehler: Distanzen dürfen nicht negativ sein.",
    error_coordinate_parse: "Fehler: Bitte Zahlen in die Koordinatenfelder eingeben.",
    error_coordinate_too_large: "Fehler: X und Y dürfen höchstens {max_x} bzw. {max_y} betragen.",
    error_solve_failed: "Koordinaten konnten nicht berechnet werden.",
    close_tooltip: "Schließen",
    options_tooltip: "Optionen",
    options_title: "Optionen",
    options_language: "Sprache:",
    options_limits: "Eingabegrenzen",
    options_max_distance: "Max. Distanz:",
    options_max_x: "Max. X:",
    options_max_y: "Max. Y:",
    options_solver: "Solver",
    options_objective_tolerance: "Toleranz Zielfunktion:",
    options_gradient_tolerance: "Toleranz Gradient:",
    options_max_iterations: "Max. Iterationen:",
    options_history_size: "Verlaufspaare:",
    options_reset: "Standardwerte",
    options_close: "Schließen",
};

static RUSSIAN: Texts = Texts {
    app_title: "ScrapCoords",
    tab_coordinates: "Координаты",
    tab_distances: "Расстояния",
    color_names: ["Красный", "Зелёный", "Синий", "Жёлтый"],
    color_names_between: ["красным", "зелёным", "синим", "жёлтым"],
    direction_line: "{axis} - Между {first} и {second} маяком",
    distance_label: "Расстояние до маяка №{index} ({color}):",
    distance_hint: "Расстояние до маяка №{index} ({color})",
    coordinate_x_label: "Координата X:",
    coordinate_x_hint: "Введите координату X",
    coordinate_y_label: "Координата Y:",
    coordinate_y_hint: "Введите координату Y",
    calculate_coordinates: "Вычислить координаты",
    calculate_distances: "Вычислить расстояния",
    position_result: "Вычисленные координаты: x={x}, y={y}",
    distance_result_line: "Маяк №{index} ({color}) = {distance}",
    error_distance_parse: "Ошибка: Введите числа в поля расстояний.",
    error_distance_too_large: "Ошибка: Неправильно введены расстояния для маяков, слишком большие значения (> {limit}).",
    error_distance_negative: "Ошибка: Расстояния должны быть неотрицательными.",
    error_coordinate_parse: "Ошибка: Введите числа в поля координат.",
    error_coordinate_too_large: "Ошибка: Координаты X и Y не могут быть больше {max_x} и {max_y} соответственно.",
    error_solve_failed: "Не удалось вычислить координаты.",
    close_tooltip: "Закрыть",
    options_tooltip: "Настройки",
    options_title: "Настройки",
    options_language: "Язык:",
    options_limits: "Границы ввода",
    options_max_distance: "Макс. расстояние:",
    options_max_x: "Макс. X:",
    options_max_y: "Макс. Y:",
    options_solver: "Решатель",
    options_objective_tolerance: "Допуск функции:",
    options_gradient_tolerance: "Допуск градиента:",
    options_max_iterations: "Макс. итераций:",
    options_history_size: "Пар в истории:",
    options_reset: "По умолчанию",
    options_close: "Закрыть",
};

/// Liefert den Katalog einer Sprache.
pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
        Language::Russian => &RUSSIAN,
    }
}

impl Texts {
    /// Anzeigename einer Bakenfarbe.
    pub fn color_name(&self, color: BeaconColor) -> &'static str {
        self.color_names[color.index()]
    }

    /// Bakenfarbe in der Form für die Richtungsanzeige.
    pub fn color_name_between(&self, color: BeaconColor) -> &'static str {
        self.color_names_between[color.index()]
    }
}

/// Ersetzt `{name}`-Platzhalter in `template`.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
