//! Handler für die Strecken-/Flächenmessung.

use crate::app::tools::{InteractionSession, MeasureKind};
use crate::app::AppState;
use crate::core::Coordinate;

/// Startet eine neue Messung (verwirft eine laufende).
pub fn start(state: &mut AppState, kind: MeasureKind) {
    let (session, mut ctx) = state.measurement_parts();
    session.start(kind, &mut ctx);
}

/// Reicht einen Kartenklick an die Messung weiter.
pub fn click(state: &mut AppState, pos: Coordinate) {
    let (session, mut ctx) = state.measurement_parts();
    session.on_click(pos, &mut ctx);
}

/// Reicht eine Mausbewegung an die Messung weiter.
pub fn pointer_move(state: &mut AppState, pos: Coordinate) {
    let (session, mut ctx) = state.measurement_parts();
    session.on_pointer_move(pos, &mut ctx);
}

/// Reicht einen Doppelklick an die Messung weiter.
pub fn double_click(state: &mut AppState, pos: Coordinate) {
    let (session, mut ctx) = state.measurement_parts();
    session.on_double_click(pos, &mut ctx);
}

/// Beendet die Messung, Gezeichnetes bleibt stehen.
pub fn stop(state: &mut AppState) {
    let (session, mut ctx) = state.measurement_parts();
    session.stop(&mut ctx);
}

/// Löscht Messung und Zeichnung.
pub fn clear(state: &mut AppState) {
    let (session, mut ctx) = state.measurement_parts();
    session.clear(&mut ctx);
}
