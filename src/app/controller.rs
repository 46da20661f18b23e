//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Karten-/Panel-Events und Sessions auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Messung ===
            AppCommand::StartMeasurement { kind } => handlers::measure::start(state, kind),
            AppCommand::MeasureClick { pos } => handlers::measure::click(state, pos),
            AppCommand::MeasurePointerMove { pos } => handlers::measure::pointer_move(state, pos),
            AppCommand::MeasureDoubleClick { pos } => handlers::measure::double_click(state, pos),
            AppCommand::StopMeasurement => handlers::measure::stop(state),
            AppCommand::ClearMeasurements => handlers::measure::clear(state),

            // === Selektion ===
            AppCommand::StartSelection { kind } => handlers::select::start(state, kind),
            AppCommand::SelectClick { pos } => handlers::select::click(state, pos),
            AppCommand::SelectPointerMove { pos } => handlers::select::pointer_move(state, pos),
            AppCommand::SelectDoubleClick { pos } => handlers::select::double_click(state, pos),
            AppCommand::StopSelection => handlers::select::stop(state),
            AppCommand::ClearSelection => handlers::select::clear(state),

            // === Layer ===
            AppCommand::SelectGeologyLayer { id } => handlers::layers::select_geology(state, id),
            AppCommand::SetOrientationLayer { id, enabled } => {
                handlers::layers::set_orientation(state, id, enabled)
            }

            // === Ansicht & Optionen ===
            AppCommand::FitToBounds { bounds } => handlers::view::fit_to_bounds(state, bounds),
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, *options),
        }

        Ok(())
    }
}
