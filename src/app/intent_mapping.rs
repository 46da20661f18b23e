//! Mapping von UI-Intents auf mutierende App-Commands.

use super::surface::MapSurface;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{InputKind, SessionOwner};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartMeasurementRequested { kind } => {
            vec![AppCommand::StartMeasurement { kind }]
        }
        AppIntent::StopMeasurementRequested => vec![AppCommand::StopMeasurement],
        AppIntent::ClearMeasurementsRequested => vec![AppCommand::ClearMeasurements],
        AppIntent::StartSelectionRequested { kind } => vec![AppCommand::StartSelection { kind }],
        AppIntent::StopSelectionRequested => vec![AppCommand::StopSelection],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        // Karteneingaben gehen nur an Sessions mit passendem Abo
        AppIntent::MapClicked { pos } => routed(state, InputKind::Click, |owner| match owner {
            SessionOwner::Measurement => AppCommand::MeasureClick { pos },
            SessionOwner::Selection => AppCommand::SelectClick { pos },
        }),
        AppIntent::MapPointerMoved { pos } => {
            routed(state, InputKind::PointerMove, |owner| match owner {
                SessionOwner::Measurement => AppCommand::MeasurePointerMove { pos },
                SessionOwner::Selection => AppCommand::SelectPointerMove { pos },
            })
        }
        AppIntent::MapDoubleClicked { pos } => {
            routed(state, InputKind::DoubleClick, |owner| match owner {
                SessionOwner::Measurement => AppCommand::MeasureDoubleClick { pos },
                SessionOwner::Selection => AppCommand::SelectDoubleClick { pos },
            })
        }

        AppIntent::GeologyLayerSelected { id } => vec![AppCommand::SelectGeologyLayer { id }],
        AppIntent::OrientationLayerToggled { id, enabled } => {
            vec![AppCommand::SetOrientationLayer { id, enabled }]
        }

        AppIntent::ZoomToExtentRequested => vec![AppCommand::FitToBounds {
            bounds: state.options.home_extent,
        }],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Ein Command je abonnierter Session, Messung vor Selektion.
fn routed(
    state: &AppState,
    input: InputKind,
    command_for: impl Fn(SessionOwner) -> AppCommand,
) -> Vec<AppCommand> {
    SessionOwner::ALL
        .into_iter()
        .filter(|owner| state.surface.is_subscribed(*owner, input))
        .map(command_for)
        .collect()
}
