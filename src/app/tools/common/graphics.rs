//! Overlay-Handles einer Session (Linie, Polygon, Marker, Live-Label).

use crate::app::surface::MapSurface;
use crate::core::Coordinate;
use crate::shared::{LabelAnchor, OverlayId, OverlayPrimitive, SessionOwner, StrokeStyle};

/// Merkt sich, welche Primitive eine Session gerade auf der Oberfläche hat.
///
/// Permanente Ergebnis-Labels werden nicht gemerkt; sie verschwinden erst
/// mit `erase()`.
#[derive(Debug, Clone)]
pub(crate) struct SessionGraphics {
    owner: SessionOwner,
    line: Option<OverlayId>,
    polygon: Option<OverlayId>,
    marker: Option<OverlayId>,
    live_label: Option<OverlayId>,
}

impl SessionGraphics {
    /// Erstellt leere Handles für `owner`.
    pub fn new(owner: SessionOwner) -> Self {
        Self {
            owner,
            line: None,
            polygon: None,
            marker: None,
            live_label: None,
        }
    }

    /// Handle des Linienzugs.
    pub fn line(&self) -> Option<OverlayId> {
        self.line
    }

    /// Handle des Polygons.
    pub fn polygon(&self) -> Option<OverlayId> {
        self.polygon
    }

    /// Handle des Live-Labels.
    pub fn live_label(&self) -> Option<OverlayId> {
        self.live_label
    }

    /// Zeichnet den Linienzug über `points`; ein einzelner Punkt wird als
    /// Linie der Länge null dargestellt.
    pub fn show_line(
        &mut self,
        surface: &mut dyn MapSurface,
        points: &[Coordinate],
        style: StrokeStyle,
    ) {
        let points = match points {
            [] => return,
            [single] => vec![*single, *single],
            many => many.to_vec(),
        };
        let primitive = OverlayPrimitive::Line { points, style };
        upsert(surface, self.owner, &mut self.line, primitive);
    }

    /// Entfernt den Linienzug.
    pub fn hide_line(&mut self, surface: &mut dyn MapSurface) {
        if let Some(id) = self.line.take() {
            surface.remove(id);
        }
    }

    /// Zeichnet das gefüllte Polygon über `ring`.
    pub fn show_polygon(
        &mut self,
        surface: &mut dyn MapSurface,
        ring: &[Coordinate],
        style: StrokeStyle,
    ) {
        let primitive = OverlayPrimitive::Polygon {
            ring: ring.to_vec(),
            style,
        };
        upsert(surface, self.owner, &mut self.polygon, primitive);
    }

    /// Setzt den Kreis-Marker.
    pub fn show_marker(
        &mut self,
        surface: &mut dyn MapSurface,
        at: Coordinate,
        radius_px: f32,
        style: StrokeStyle,
    ) {
        let primitive = OverlayPrimitive::Marker { at, radius_px, style };
        upsert(surface, self.owner, &mut self.marker, primitive);
    }

    /// Setzt oder verschiebt das Live-Label.
    pub fn set_live_label(&mut self, surface: &mut dyn MapSurface, at: Coordinate, text: String) {
        let primitive = OverlayPrimitive::Label {
            at,
            text,
            permanent: false,
            anchor: LabelAnchor::Top,
        };
        upsert(surface, self.owner, &mut self.live_label, primitive);
    }

    /// Entfernt das Live-Label.
    pub fn remove_live_label(&mut self, surface: &mut dyn MapSurface) {
        if let Some(id) = self.live_label.take() {
            surface.remove(id);
        }
    }

    /// Hängt ein permanentes Ergebnis-Label an.
    pub fn add_result_label(
        &mut self,
        surface: &mut dyn MapSurface,
        at: Coordinate,
        text: String,
        anchor: LabelAnchor,
    ) -> OverlayId {
        surface.add(
            self.owner,
            OverlayPrimitive::Label {
                at,
                text,
                permanent: true,
                anchor,
            },
        )
    }

    /// Färbt Linie und Polygon um (Vorschau → abgeschlossen).
    pub fn restyle_shapes(&mut self, surface: &mut dyn MapSurface, style: StrokeStyle) {
        for id in [self.line, self.polygon].into_iter().flatten() {
            surface.restyle(id, style);
        }
    }

    /// Entfernt alles, was dieser Besitzer gezeichnet hat.
    pub fn erase(&mut self, surface: &mut dyn MapSurface) {
        surface.clear_owner(self.owner);
        self.line = None;
        self.polygon = None;
        self.marker = None;
        self.live_label = None;
    }
}

/// Aktualisiert das Primitiv hinter `slot` oder legt es neu an.
fn upsert(
    surface: &mut dyn MapSurface,
    owner: SessionOwner,
    slot: &mut Option<OverlayId>,
    primitive: OverlayPrimitive,
) {
    if let Some(id) = *slot {
        if surface.update(id, primitive.clone()) {
            return;
        }
    }
    *slot = Some(surface.add(owner, primitive));
}
