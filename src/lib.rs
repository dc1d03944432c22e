//! ScrapCoords Library.
//! Bestimmt Positionen aus vier Baken-Distanzen und umgekehrt.
//! Controller, State und UI als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Tab};
pub use scrap_coords_engine as engine;
pub use shared::{AppOptions, Language};
