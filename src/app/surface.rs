//! Kartenoberfläche: Eingabe-Abos, Cursor und Overlay-Zeichenebene.
//!
//! Sessions sprechen nur mit dem `MapSurface`-Trait. `OverlaySurface` ist die
//! In-Memory-Implementierung, die ein Frontend pro Frame ausliest.

use crate::core::LatLngBounds;
use crate::shared::{CursorStyle, InputKind, OverlayId, OverlayPrimitive, SessionOwner, StrokeStyle};
use indexmap::{IndexMap, IndexSet};

/// Schnittstelle der Kartenansicht, wie Sessions sie benötigen.
pub trait MapSurface {
    /// Eingabe abonnieren (idempotent).
    fn subscribe(&mut self, owner: SessionOwner, input: InputKind);

    /// Abo lösen (no-op wenn nicht abonniert).
    fn unsubscribe(&mut self, owner: SessionOwner, input: InputKind);

    /// Ist `owner` auf `input` abonniert?
    fn is_subscribed(&self, owner: SessionOwner, input: InputKind) -> bool;

    /// Cursor-Darstellung setzen.
    fn set_cursor(&mut self, cursor: CursorStyle);

    /// Primitiv hinzufügen, gibt dessen Handle zurück.
    fn add(&mut self, owner: SessionOwner, primitive: OverlayPrimitive) -> OverlayId;

    /// Primitiv ersetzen; `false` wenn das Handle unbekannt ist.
    fn update(&mut self, id: OverlayId, primitive: OverlayPrimitive) -> bool;

    /// Nur den Stil eines Primitivs ersetzen; `false` bei unbekanntem Handle oder Label.
    fn restyle(&mut self, id: OverlayId, style: StrokeStyle) -> bool;

    /// Primitiv entfernen; `false` wenn das Handle unbekannt ist.
    fn remove(&mut self, id: OverlayId) -> bool;

    /// Alle Primitive eines Besitzers entfernen.
    fn clear_owner(&mut self, owner: SessionOwner);

    /// Ausschnitt auf `bounds` setzen.
    fn fit_bounds(&mut self, bounds: LatLngBounds);
}

/// Eintrag der Zeichenebene
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    /// Besitzer (für `clear_owner`)
    pub owner: SessionOwner,
    /// Gezeichnetes Primitiv
    pub primitive: OverlayPrimitive,
}

/// In-Memory-Kartenoberfläche mit deterministischer Reihenfolge.
#[derive(Debug, Default)]
pub struct OverlaySurface {
    subscriptions: IndexSet<(SessionOwner, InputKind)>,
    cursor: CursorStyle,
    entries: IndexMap<OverlayId, OverlayEntry>,
    next_id: u64,
    view_bounds: Option<LatLngBounds>,
}

impl OverlaySurface {
    /// Erstellt eine leere Oberfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Cursor.
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Aktueller Kartenausschnitt (falls gesetzt).
    pub fn view_bounds(&self) -> Option<LatLngBounds> {
        self.view_bounds
    }

    /// Besitzer mit Abo auf `input`, in Abo-Reihenfolge.
    pub fn subscribers(&self, input: InputKind) -> impl Iterator<Item = SessionOwner> + '_ {
        self.subscriptions
            .iter()
            .filter(move |(_, kind)| *kind == input)
            .map(|(owner, _)| *owner)
    }

    /// Anzahl aller Abos (beide Besitzer).
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Primitiv per Handle.
    pub fn get(&self, id: OverlayId) -> Option<&OverlayPrimitive> {
        self.entries.get(&id).map(|entry| &entry.primitive)
    }

    /// Alle Primitive in Zeichenreihenfolge.
    pub fn primitives(&self) -> impl Iterator<Item = (OverlayId, &OverlayEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Primitive eines Besitzers in Zeichenreihenfolge.
    pub fn primitives_of(&self, owner: SessionOwner) -> impl Iterator<Item = &OverlayPrimitive> {
        self.entries
            .values()
            .filter(move |entry| entry.owner == owner)
            .map(|entry| &entry.primitive)
    }

    /// Anzahl gezeichneter Primitive.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts gezeichnet ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MapSurface for OverlaySurface {
    fn subscribe(&mut self, owner: SessionOwner, input: InputKind) {
        self.subscriptions.insert((owner, input));
    }

    fn unsubscribe(&mut self, owner: SessionOwner, input: InputKind) {
        self.subscriptions.shift_remove(&(owner, input));
    }

    fn is_subscribed(&self, owner: SessionOwner, input: InputKind) -> bool {
        self.subscriptions.contains(&(owner, input))
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    fn add(&mut self, owner: SessionOwner, primitive: OverlayPrimitive) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.entries.insert(id, OverlayEntry { owner, primitive });
        id
    }

    fn update(&mut self, id: OverlayId, primitive: OverlayPrimitive) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.primitive = primitive;
                true
            }
            None => false,
        }
    }

    fn restyle(&mut self, id: OverlayId, style: StrokeStyle) -> bool {
        self.entries
            .get_mut(&id)
            .is_some_and(|entry| entry.primitive.set_style(style))
    }

    fn remove(&mut self, id: OverlayId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    fn clear_owner(&mut self, owner: SessionOwner) {
        self.entries.retain(|_, entry| entry.owner != owner);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.view_bounds = Some(bounds);
    }
}
