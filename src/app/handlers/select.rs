//! Handler für die räumliche Selektion.

use crate::app::tools::{InteractionSession, SelectKind};
use crate::app::AppState;
use crate::core::Coordinate;

/// Startet eine neue Selektion (verwirft eine laufende).
pub fn start(state: &mut AppState, kind: SelectKind) {
    let (session, mut ctx) = state.selection_parts();
    session.start(kind, &mut ctx);
}

/// Reicht einen Kartenklick an die Selektion weiter.
pub fn click(state: &mut AppState, pos: Coordinate) {
    let (session, mut ctx) = state.selection_parts();
    session.on_click(pos, &mut ctx);
}

/// Reicht eine Mausbewegung an die Selektion weiter.
pub fn pointer_move(state: &mut AppState, pos: Coordinate) {
    let (session, mut ctx) = state.selection_parts();
    session.on_pointer_move(pos, &mut ctx);
}

/// Reicht einen Doppelklick an die Selektion weiter.
pub fn double_click(state: &mut AppState, pos: Coordinate) {
    let (session, mut ctx) = state.selection_parts();
    session.on_double_click(pos, &mut ctx);
}

/// Beendet die Selektion, Gezeichnetes bleibt stehen.
pub fn stop(state: &mut AppState) {
    let (session, mut ctx) = state.selection_parts();
    session.stop(&mut ctx);
}

/// Löscht Selektion, Zeichnung und Treffer.
pub fn clear(state: &mut AppState) {
    let (session, mut ctx) = state.selection_parts();
    session.clear(&mut ctx);
}
