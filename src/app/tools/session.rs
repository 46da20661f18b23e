//! InteractionSession-Trait: Schnittstelle für Messung und Selektion.

use crate::core::Coordinate;
use crate::shared::SessionOwner;

use super::{SessionAction, SessionContext, SessionMode};

/// Schnittstelle beider Interaktions-Controller.
///
/// Sessions sind zustandsbehaftet (Idle → Active → Completed) und zeichnen
/// ausschließlich über `SessionContext::surface`. Ungültige Eingaben sind
/// keine Fehler, sondern `SessionAction::Ignored`.
pub trait InteractionSession {
    /// Art der Session (Distanz/Fläche bzw. Polygon/Punkt)
    type Kind: Copy + std::fmt::Debug;

    /// Besitzer-Kennung für Abos und Overlay-Primitive
    fn owner(&self) -> SessionOwner;

    /// Aktueller Modus
    fn mode(&self) -> SessionMode;

    /// Art der laufenden oder letzten Session
    fn kind(&self) -> Option<Self::Kind>;

    /// Gesammelte Punkte in Klick-Reihenfolge
    fn points(&self) -> &[Coordinate];

    /// Eingefrorene Geometrie, nur im Modus `Completed`
    fn final_geometry(&self) -> Option<&[Coordinate]>;

    /// Neue Session starten; verwirft eine laufende und deren Zeichnung.
    fn start(&mut self, kind: Self::Kind, ctx: &mut SessionContext<'_>);

    /// Kartenklick verarbeiten.
    fn on_click(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction;

    /// Mausbewegung verarbeiten (Rubber-Band, ohne `points` zu ändern).
    fn on_pointer_move(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>)
        -> SessionAction;

    /// Doppelklick verarbeiten (Abschluss, wenn genug Punkte).
    fn on_double_click(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>)
        -> SessionAction;

    /// Abos lösen, Cursor zurücksetzen, Live-Label entfernen.
    fn stop(&mut self, ctx: &mut SessionContext<'_>);

    /// `stop()` plus Entfernen aller Zeichnungen; zurück nach Idle.
    fn clear(&mut self, ctx: &mut SessionContext<'_>);

    /// Ist die Session aktiv?
    fn is_active(&self) -> bool {
        self.mode() == SessionMode::Active
    }
}
