//! State-Definitionen und Konstruktor der Messung.

use super::super::common::SessionGraphics;
use super::super::SessionMode;
use crate::core::Coordinate;
use crate::shared::{SessionOwner, StrokeStyle, ViewerOptions};
use serde::{Deserialize, Serialize};

/// Art der Messung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// Streckenlänge entlang eines Linienzugs
    Distance,
    /// Fläche eines geschlossenen Rings
    Area,
}

/// Einheit von `MeasurementResult::total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    /// Strecke in km
    Kilometers,
    /// Fläche in ha
    Hectares,
}

/// Nutzlast von `measure-finish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Art der Messung
    pub kind: MeasureKind,
    /// Punkte in Klick-Reihenfolge
    pub points: Vec<Coordinate>,
    /// Gesamtstrecke (km) bzw. Fläche (ha)
    pub total: f64,
    /// Länge des letzten Segments in km (nur Distanz)
    #[serde(rename = "last", skip_serializing_if = "Option::is_none", default)]
    pub last_segment: Option<f64>,
    /// Umfang des geschlossenen Rings in km (nur Fläche)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub perimeter: Option<f64>,
    /// Einheit von `total`
    pub unit: MeasureUnit,
}

/// Strecken-/Flächenmessung als Zustandsmaschine.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    pub(crate) mode: SessionMode,
    pub(crate) kind: Option<MeasureKind>,
    pub(crate) points: Vec<Coordinate>,
    pub(crate) final_geometry: Option<Vec<Coordinate>>,
    pub(crate) result: Option<MeasurementResult>,
    pub(crate) graphics: SessionGraphics,
    /// Stil der Vorschau (gestrichelt)
    pub(crate) active_style: StrokeStyle,
    /// Stil nach Abschluss (durchgezogen)
    pub(crate) completed_style: StrokeStyle,
    /// Kugelradius für Strecke, Umfang und Fläche
    pub(crate) earth_radius_m: f64,
}

impl MeasurementSession {
    /// Erstellt eine Idle-Session mit Stil und Erdradius aus `options`.
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            mode: SessionMode::Idle,
            kind: None,
            points: Vec::new(),
            final_geometry: None,
            result: None,
            graphics: SessionGraphics::new(SessionOwner::Measurement),
            active_style: options.active_style(),
            completed_style: options.completed_style(),
            earth_radius_m: options.earth_radius_m,
        }
    }

    /// Übernimmt geänderte Optionen; wirkt ab der nächsten Zeichnung.
    pub fn apply_options(&mut self, options: &ViewerOptions) {
        self.active_style = options.active_style();
        self.completed_style = options.completed_style();
        self.earth_radius_m = options.earth_radius_m;
    }

    /// Ergebnis der letzten abgeschlossenen Messung.
    pub fn result(&self) -> Option<&MeasurementResult> {
        self.result.as_ref()
    }
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(&ViewerOptions::default())
    }
}
