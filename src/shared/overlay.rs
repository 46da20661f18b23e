//! Overlay-Primitive als Übergabevertrag zwischen Sessions und Kartenoberfläche.
//!
//! Sessions beschreiben nur, *was* gezeichnet wird; wie eine Oberfläche
//! Linien, Polygone, Marker und Labels darstellt, bleibt ihr überlassen.

use crate::core::Coordinate;
use serde::{Deserialize, Serialize};

/// Handle eines gezeichneten Primitivs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverlayId(pub u64);

/// Zeigereingaben, die eine Session abonnieren kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Einfacher Klick
    Click,
    /// Mausbewegung
    PointerMove,
    /// Doppelklick
    DoubleClick,
}

impl InputKind {
    /// Alle Eingabearten.
    pub const ALL: [InputKind; 3] = [
        InputKind::Click,
        InputKind::PointerMove,
        InputKind::DoubleClick,
    ];
}

/// Besitzer von Abos und Overlay-Primitiven (je Controller-Typ genau einer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOwner {
    /// Strecken-/Flächenmessung
    Measurement,
    /// Räumliche Selektion
    Selection,
}

impl SessionOwner {
    /// Alle Besitzer.
    pub const ALL: [SessionOwner; 2] = [SessionOwner::Measurement, SessionOwner::Selection];
}

/// Cursor-Darstellung über der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    /// Standard-Cursor der Karte
    #[default]
    Default,
    /// Fadenkreuz während einer Session
    Crosshair,
}

/// Strich- und Füllstil eines Primitivs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Pixeln
    pub weight: f32,
    /// Gestrichelt (Vorschau) oder durchgezogen (fertig)
    pub dashed: bool,
    /// Deckkraft der Füllung (nur Polygone/Marker)
    pub fill_opacity: f32,
}

/// Ausrichtung eines Labels relativ zu seiner Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    /// Über dem Punkt
    Top,
    /// Zentriert
    Center,
}

/// Zeichenbares Element auf der Overlay-Ebene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayPrimitive {
    /// Offener Linienzug
    Line {
        points: Vec<Coordinate>,
        style: StrokeStyle,
    },
    /// Gefülltes Polygon (Ring implizit geschlossen)
    Polygon {
        ring: Vec<Coordinate>,
        style: StrokeStyle,
    },
    /// Kreis-Marker
    Marker {
        at: Coordinate,
        radius_px: f32,
        style: StrokeStyle,
    },
    /// Text-Label; `permanent` unterscheidet feste Ergebnis-Labels vom Live-Label
    Label {
        at: Coordinate,
        text: String,
        permanent: bool,
        anchor: LabelAnchor,
    },
}

impl OverlayPrimitive {
    /// Stil des Primitivs (Labels haben keinen).
    pub fn style(&self) -> Option<&StrokeStyle> {
        match self {
            OverlayPrimitive::Line { style, .. }
            | OverlayPrimitive::Polygon { style, .. }
            | OverlayPrimitive::Marker { style, .. } => Some(style),
            OverlayPrimitive::Label { .. } => None,
        }
    }

    /// Ersetzt den Stil; `false` bei Labels.
    pub fn set_style(&mut self, new_style: StrokeStyle) -> bool {
        match self {
            OverlayPrimitive::Line { style, .. }
            | OverlayPrimitive::Polygon { style, .. }
            | OverlayPrimitive::Marker { style, .. } => {
                *style = new_style;
                true
            }
            OverlayPrimitive::Label { .. } => false,
        }
    }

    /// Ist das ein nicht-permanentes Label?
    pub fn is_live_label(&self) -> bool {
        matches!(self, OverlayPrimitive::Label { permanent: false, .. })
    }
}
