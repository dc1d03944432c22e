mod app_state;
mod tabs;

pub use app_state::AppState;
pub use tabs::{CoordinatesTabState, DistancesTabState, Tab};
