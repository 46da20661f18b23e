//! State-Definitionen und Konstruktor der Selektion.

use super::super::common::SessionGraphics;
use super::super::SessionMode;
use crate::core::{Coordinate, FeatureHit, SelectionGeometry};
use crate::shared::{SessionOwner, StrokeStyle, ViewerOptions};
use serde::{Deserialize, Serialize};

/// Art der Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectKind {
    /// Polygon per Klicks, Abschluss per Doppelklick
    Polygon,
    /// Einzelner Klick
    Point,
}

/// Nutzlast von `select-finish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Art der Selektion
    pub kind: SelectKind,
    /// Ring oder Punkt
    pub geometry: SelectionGeometry,
    /// Treffer des FeatureLocators
    pub features: Vec<FeatureHit>,
}

/// Räumliche Selektion als Zustandsmaschine.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    pub(crate) mode: SessionMode,
    pub(crate) kind: Option<SelectKind>,
    pub(crate) points: Vec<Coordinate>,
    pub(crate) final_geometry: Option<Vec<Coordinate>>,
    pub(crate) result: Option<SelectionResult>,
    pub(crate) graphics: SessionGraphics,
    pub(crate) active_style: StrokeStyle,
    pub(crate) completed_style: StrokeStyle,
    pub(crate) marker_style: StrokeStyle,
    pub(crate) marker_radius_px: f32,
}

impl SelectionSession {
    /// Erstellt eine Idle-Session mit Stilen aus `options`.
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            mode: SessionMode::Idle,
            kind: None,
            points: Vec::new(),
            final_geometry: None,
            result: None,
            graphics: SessionGraphics::new(SessionOwner::Selection),
            active_style: options.active_style(),
            completed_style: options.completed_style(),
            marker_style: options.marker_style(),
            marker_radius_px: options.marker_radius_px,
        }
    }

    /// Übernimmt geänderte Stile.
    pub fn apply_options(&mut self, options: &ViewerOptions) {
        self.active_style = options.active_style();
        self.completed_style = options.completed_style();
        self.marker_style = options.marker_style();
        self.marker_radius_px = options.marker_radius_px;
    }

    /// Ergebnis der letzten abgeschlossenen Selektion.
    pub fn result(&self) -> Option<&SelectionResult> {
        self.result.as_ref()
    }

    /// Treffer der letzten Selektion (leer ohne Ergebnis).
    pub fn selected_features(&self) -> &[FeatureHit] {
        self.result.as_ref().map_or(&[], |result| result.features.as_slice())
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new(&ViewerOptions::default())
    }
}
