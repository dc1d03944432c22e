//! ScrapCoords.
//!
//! Baken-Trilateration: Koordinaten aus vier Distanzen und Distanzen aus
//! Koordinaten, in einem kleinen rahmenlosen egui-Fenster.

use std::path::Path;

use eframe::egui;
use scrap_coords::shared::options::{WINDOW_ICON_PATH, WINDOW_SIZE};
use scrap_coords::{ui, AppController, AppIntent, AppOptions, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren, RUST_LOG hat Vorrang
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        log::info!("ScrapCoords v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let app_options = AppOptions::load_from_file(&AppOptions::config_path());

        let mut viewport = egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_decorations(false)
            .with_title("ScrapCoords");
        if let Some(icon) = ui::load_window_icon(Path::new(WINDOW_ICON_PATH)) {
            viewport = viewport.with_icon(icon);
        }

        let options = eframe::NativeOptions {
            viewport,
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "ScrapCoords",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                ui::theme::apply(&cc.egui_ctx);
                Ok(Box::new(CalculatorApp::new(app_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CalculatorApp {
    state: AppState,
    controller: AppController,
    assets: ui::TitleAssets,
}

impl CalculatorApp {
    fn new(options: AppOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            assets: ui::TitleAssets::discover(),
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
        self.forward_window_commands(ctx);
    }
}

impl CalculatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_title_bar(ctx, &self.state, &self.assets));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::render_calculator_panel(ctx, &mut self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    /// Reicht Fenster-Signale aus dem State an den Viewport weiter.
    fn forward_window_commands(&mut self, ctx: &egui::Context) {
        if std::mem::take(&mut self.state.window_drag_pending) {
            ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
