//! Lifecycle-Methoden der Selektion (InteractionSession-Implementierung).

use super::super::common::{release_inputs, rubber_band, subscribe_inputs, SessionGraphics};
use super::super::{InteractionSession, SessionAction, SessionContext, SessionMode};
use super::state::{SelectKind, SelectionResult, SelectionSession};
use crate::app::events::ViewerEvent;
use crate::app::surface::MapSurface;
use crate::core::{active_layers, Coordinate, SelectionGeometry};
use crate::shared::{InputKind, SessionOwner, StrokeStyle};

const COMPLETE_HINT: &str = "Double-click to complete selection";
const FIRST_POINT_HINT: &str = "Click to continue selecting";

/// Mindestanzahl Punkte für ein Selektions-Polygon.
const MIN_POLYGON_POINTS: usize = 3;

/// Text des Live-Labels nach `placed` gesetzten Punkten.
fn live_label_text(placed: usize) -> String {
    if placed > 1 {
        format!("Points: {placed}\n{COMPLETE_HINT}")
    } else {
        COMPLETE_HINT.to_owned()
    }
}

/// Umriss: Linienzug unter drei gesetzten Punkten, danach gefülltes Polygon.
fn draw_outline(
    graphics: &mut SessionGraphics,
    surface: &mut dyn MapSurface,
    geometry: &[Coordinate],
    placed: usize,
    style: StrokeStyle,
) {
    if placed >= MIN_POLYGON_POINTS {
        graphics.hide_line(surface);
        graphics.show_polygon(surface, geometry, style);
    } else {
        graphics.show_line(surface, geometry, style);
    }
}

impl SelectionSession {
    fn active_kind(&self) -> Option<SelectKind> {
        match self.mode {
            SessionMode::Active => self.kind,
            _ => None,
        }
    }

    /// Fragt die aktiven Layer ab und meldet das Ergebnis.
    fn complete(
        &mut self,
        kind: SelectKind,
        geometry: SelectionGeometry,
        ctx: &mut SessionContext<'_>,
    ) -> SessionAction {
        let layers = active_layers(ctx.catalog, ctx.toggles);
        let features = ctx.locator.query(&geometry, &layers);

        self.final_geometry = Some(self.points.clone());
        self.mode = SessionMode::Completed;

        log::info!(
            "Selektion abgeschlossen: {:?}, {} Layer aktiv, {} Treffer",
            kind,
            layers.len(),
            features.len()
        );
        let result = SelectionResult {
            kind,
            geometry,
            features,
        };
        ctx.emit(ViewerEvent::SelectFinish(result.clone()));
        self.result = Some(result);
        SessionAction::Completed
    }

    fn select_point(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        release_inputs(ctx.surface, SessionOwner::Selection);
        self.graphics.remove_live_label(ctx.surface);

        self.points = vec![pos];
        self.graphics
            .show_marker(ctx.surface, pos, self.marker_radius_px, self.marker_style);

        self.complete(SelectKind::Point, SelectionGeometry::Point { point: pos }, ctx)
    }
}

impl InteractionSession for SelectionSession {
    type Kind = SelectKind;

    fn owner(&self) -> SessionOwner {
        SessionOwner::Selection
    }

    fn mode(&self) -> SessionMode {
        self.mode
    }

    fn kind(&self) -> Option<SelectKind> {
        self.kind
    }

    fn points(&self) -> &[Coordinate] {
        &self.points
    }

    fn final_geometry(&self) -> Option<&[Coordinate]> {
        self.final_geometry.as_deref()
    }

    fn start(&mut self, kind: SelectKind, ctx: &mut SessionContext<'_>) {
        self.stop(ctx);
        self.graphics.erase(ctx.surface);
        self.points.clear();
        self.final_geometry = None;
        self.result = None;
        self.kind = Some(kind);
        self.mode = SessionMode::Active;

        let inputs: &[InputKind] = match kind {
            SelectKind::Polygon => &InputKind::ALL,
            SelectKind::Point => &[InputKind::Click],
        };
        subscribe_inputs(ctx.surface, SessionOwner::Selection, inputs);
        log::info!("Selektion gestartet: {:?}", kind);
        ctx.emit(ViewerEvent::SelectStart { kind });
    }

    fn on_click(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        match self.active_kind() {
            None => SessionAction::Ignored,
            Some(SelectKind::Point) => self.select_point(pos, ctx),
            Some(SelectKind::Polygon) => {
                self.points.push(pos);
                draw_outline(
                    &mut self.graphics,
                    ctx.surface,
                    &self.points,
                    self.points.len(),
                    self.active_style,
                );

                let text = if self.points.len() == 1 {
                    FIRST_POINT_HINT.to_owned()
                } else {
                    live_label_text(self.points.len())
                };
                self.graphics.set_live_label(ctx.surface, pos, text);

                log::debug!("Selektionspunkt {} gesetzt: {:?}", self.points.len(), pos);
                SessionAction::Continue
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        if self.active_kind() != Some(SelectKind::Polygon) || self.points.is_empty() {
            return SessionAction::Ignored;
        }

        let band = rubber_band(&self.points, pos);
        draw_outline(
            &mut self.graphics,
            ctx.surface,
            &band,
            self.points.len(),
            self.active_style,
        );
        self.graphics
            .set_live_label(ctx.surface, pos, live_label_text(self.points.len()));
        SessionAction::Continue
    }

    fn on_double_click(&mut self, _pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        if self.active_kind() != Some(SelectKind::Polygon) {
            return SessionAction::Ignored;
        }
        if self.points.len() < MIN_POLYGON_POINTS {
            log::debug!(
                "Doppelklick ignoriert: {} Punkte für Polygon zu wenig",
                self.points.len()
            );
            return SessionAction::Ignored;
        }

        release_inputs(ctx.surface, SessionOwner::Selection);
        self.graphics.remove_live_label(ctx.surface);

        draw_outline(
            &mut self.graphics,
            ctx.surface,
            &self.points,
            self.points.len(),
            self.active_style,
        );
        self.graphics.restyle_shapes(ctx.surface, self.completed_style);

        let ring = SelectionGeometry::Ring {
            points: self.points.clone(),
        };
        self.complete(SelectKind::Polygon, ring, ctx)
    }

    fn stop(&mut self, ctx: &mut SessionContext<'_>) {
        release_inputs(ctx.surface, SessionOwner::Selection);
        self.graphics.remove_live_label(ctx.surface);

        if self.mode == SessionMode::Active {
            self.mode = SessionMode::Idle;
            self.points.clear();
        }
    }

    fn clear(&mut self, ctx: &mut SessionContext<'_>) {
        self.stop(ctx);
        self.graphics.erase(ctx.surface);
        self.points.clear();
        self.final_geometry = None;
        self.result = None;
        self.kind = None;
        self.mode = SessionMode::Idle;

        log::info!("Selektion gelöscht");
        ctx.emit(ViewerEvent::SelectClear);
    }
}
