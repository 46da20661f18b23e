//! Eingabe-Abos und Rubber-Band-Geometrie.

use crate::app::surface::MapSurface;
use crate::core::Coordinate;
use crate::shared::{CursorStyle, InputKind, SessionOwner};

/// Abonniert `inputs` für `owner` und setzt das Fadenkreuz.
///
/// Vorher werden alle Abos des Besitzers gelöst, damit ein Neustart nie
/// doppelte Handler hinterlässt.
pub(crate) fn subscribe_inputs(
    surface: &mut dyn MapSurface,
    owner: SessionOwner,
    inputs: &[InputKind],
) {
    release_inputs(surface, owner);
    for &input in inputs {
        surface.subscribe(owner, input);
    }
    surface.set_cursor(CursorStyle::Crosshair);
}

/// Löst alle Abos von `owner`.
///
/// Der Cursor fällt erst auf Standard zurück, wenn kein Besitzer mehr Abos hält.
pub(crate) fn release_inputs(surface: &mut dyn MapSurface, owner: SessionOwner) {
    for input in InputKind::ALL {
        surface.unsubscribe(owner, input);
    }

    let still_listening = SessionOwner::ALL
        .iter()
        .any(|&other| InputKind::ALL.iter().any(|&input| surface.is_subscribed(other, input)));
    if !still_listening {
        surface.set_cursor(CursorStyle::Default);
    }
}

/// Vorschau-Geometrie: gesetzte Punkte plus aktuelle Mausposition.
pub(crate) fn rubber_band(points: &[Coordinate], pointer: Coordinate) -> Vec<Coordinate> {
    let mut band = Vec::with_capacity(points.len() + 1);
    band.extend_from_slice(points);
    band.push(pointer);
    band
}
