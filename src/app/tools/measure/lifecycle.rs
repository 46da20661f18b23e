//! Lifecycle-Methoden der Messung (InteractionSession-Implementierung).

use super::super::common::{release_inputs, rubber_band, subscribe_inputs, SessionGraphics};
use super::super::{InteractionSession, SessionAction, SessionContext, SessionMode};
use super::geometry::{build_result, live_label_text, result_label, FIRST_POINT_HINT};
use super::state::{MeasureKind, MeasurementSession};
use crate::app::events::ViewerEvent;
use crate::app::surface::MapSurface;
use crate::core::{Coordinate, LatLngBounds};
use crate::shared::{InputKind, SessionOwner, StrokeStyle};

impl MeasurementSession {
    /// Art der Messung, falls aktiv.
    fn active_kind(&self) -> Option<MeasureKind> {
        match self.mode {
            SessionMode::Active => self.kind,
            _ => None,
        }
    }

    /// Mindestanzahl Punkte für den Abschluss.
    fn required_points(kind: MeasureKind) -> usize {
        match kind {
            MeasureKind::Distance => 2,
            MeasureKind::Area => 3,
        }
    }
}

/// Zeichnet Linie und (Fläche, ab drei gesetzten Punkten) Polygon über `geometry`.
fn draw_shapes(
    graphics: &mut SessionGraphics,
    surface: &mut dyn MapSurface,
    kind: MeasureKind,
    geometry: &[Coordinate],
    placed: usize,
    style: StrokeStyle,
) {
    graphics.show_line(surface, geometry, style);
    if kind == MeasureKind::Area && placed >= 3 {
        graphics.show_polygon(surface, geometry, style);
    }
}

impl InteractionSession for MeasurementSession {
    type Kind = MeasureKind;

    fn owner(&self) -> SessionOwner {
        SessionOwner::Measurement
    }

    fn mode(&self) -> SessionMode {
        self.mode
    }

    fn kind(&self) -> Option<MeasureKind> {
        self.kind
    }

    fn points(&self) -> &[Coordinate] {
        &self.points
    }

    fn final_geometry(&self) -> Option<&[Coordinate]> {
        self.final_geometry.as_deref()
    }

    fn start(&mut self, kind: MeasureKind, ctx: &mut SessionContext<'_>) {
        self.stop(ctx);
        self.graphics.erase(ctx.surface);
        self.points.clear();
        self.final_geometry = None;
        self.result = None;
        self.kind = Some(kind);
        self.mode = SessionMode::Active;

        subscribe_inputs(ctx.surface, SessionOwner::Measurement, &InputKind::ALL);
        log::info!("Messung gestartet: {:?}", kind);
        ctx.emit(ViewerEvent::MeasureStart { kind });
    }

    fn on_click(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        let Some(kind) = self.active_kind() else {
            return SessionAction::Ignored;
        };

        self.points.push(pos);
        draw_shapes(
            &mut self.graphics,
            ctx.surface,
            kind,
            &self.points,
            self.points.len(),
            self.active_style,
        );

        let text = if self.points.len() == 1 {
            FIRST_POINT_HINT.to_owned()
        } else {
            live_label_text(kind, &self.points, self.earth_radius_m)
        };
        self.graphics.set_live_label(ctx.surface, pos, text);

        log::debug!("Messpunkt {} gesetzt: {:?}", self.points.len(), pos);
        SessionAction::Continue
    }

    fn on_pointer_move(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        let Some(kind) = self.active_kind() else {
            return SessionAction::Ignored;
        };
        if self.points.is_empty() {
            return SessionAction::Ignored;
        }

        let band = rubber_band(&self.points, pos);
        draw_shapes(
            &mut self.graphics,
            ctx.surface,
            kind,
            &band,
            self.points.len(),
            self.active_style,
        );
        let text = live_label_text(kind, &band, self.earth_radius_m);
        self.graphics.set_live_label(ctx.surface, pos, text);
        SessionAction::Continue
    }

    fn on_double_click(&mut self, pos: Coordinate, ctx: &mut SessionContext<'_>) -> SessionAction {
        let Some(kind) = self.active_kind() else {
            return SessionAction::Ignored;
        };
        if self.points.len() < Self::required_points(kind) {
            log::debug!(
                "Doppelklick ignoriert: {} Punkte für {:?} zu wenig",
                self.points.len(),
                kind
            );
            return SessionAction::Ignored;
        }

        release_inputs(ctx.surface, SessionOwner::Measurement);
        self.graphics.remove_live_label(ctx.surface);

        // Rubber-Band verwerfen, dann umfärben
        draw_shapes(
            &mut self.graphics,
            ctx.surface,
            kind,
            &self.points,
            self.points.len(),
            self.active_style,
        );
        self.graphics.restyle_shapes(ctx.surface, self.completed_style);

        let result = build_result(kind, &self.points, self.earth_radius_m);
        let label_at = LatLngBounds::from_points(&self.points)
            .map(|bounds| bounds.center())
            .unwrap_or(pos);
        let (text, anchor) = result_label(&result);
        self.graphics.add_result_label(ctx.surface, label_at, text, anchor);

        self.final_geometry = Some(self.points.clone());
        self.mode = SessionMode::Completed;

        log::info!(
            "Messung abgeschlossen: {:?}, {} Punkte, total={:.3} {:?}",
            kind,
            self.points.len(),
            result.total,
            result.unit
        );
        ctx.emit(ViewerEvent::MeasureFinish(result.clone()));
        self.result = Some(result);
        SessionAction::Completed
    }

    fn stop(&mut self, ctx: &mut SessionContext<'_>) {
        release_inputs(ctx.surface, SessionOwner::Measurement);
        self.graphics.remove_live_label(ctx.surface);

        // Abgebrochene Messung: Idle hat nie Punkte
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

        log::info!("Messungen gelöscht");
        ctx.emit(ViewerEvent::MeasureClear);
    }
}
