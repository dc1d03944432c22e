//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CalculateCoordinatesRequested => vec![AppCommand::LocatePosition {
            inputs: state.coordinates.distance_inputs.clone(),
        }],
        AppIntent::CalculateDistancesRequested => vec![AppCommand::ComputeDistances {
            x: state.distances.x_input.clone(),
            y: state.distances.y_input.clone(),
        }],
        AppIntent::TabSelected { tab } => vec![AppCommand::SelectTab { tab }],
        AppIntent::TitleBarDragStarted => vec![AppCommand::StartWindowDrag],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OptionsRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::OptionsDialogClosed => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsResetRequested => vec![AppCommand::ResetOptions],
    }
}
