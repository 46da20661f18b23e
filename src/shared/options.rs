//! Zentrale Konfiguration des Viewers.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::geodesy::EARTH_RADIUS_M;
use crate::core::layers::default_layer_defs;
use crate::core::{Coordinate, LatLngBounds, LayerCatalog, LayerDef};
use crate::shared::overlay::StrokeStyle;
use serde::{Deserialize, Serialize};

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe laufender Messungen/Selektionen (RGBA: #4a6ca4).
pub const ACTIVE_COLOR: [f32; 4] = [0.290, 0.424, 0.643, 1.0];
/// Farbe abgeschlossener Messungen/Selektionen (RGBA: #4aa459).
pub const COMPLETED_COLOR: [f32; 4] = [0.290, 0.643, 0.349, 1.0];

// ── Geometrie-Darstellung ───────────────────────────────────────────

/// Linienstärke in Pixeln.
pub const LINE_WEIGHT: f32 = 2.0;
/// Deckkraft der Polygon-Füllung.
pub const FILL_OPACITY: f32 = 0.2;
/// Radius des Punkt-Selektions-Markers in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 8.0;
/// Deckkraft der Marker-Füllung.
pub const MARKER_FILL_OPACITY: f32 = 0.8;

// ── Abfragen ────────────────────────────────────────────────────────

/// Treffer-Toleranz für Punkt-/Linien-Features bei Punkt-Selektion (Meter).
pub const POINT_QUERY_TOLERANCE_M: f64 = 250.0;
/// Maximale Treffer pro Layer (entspricht `maxFeatures` des Feature-Dienstes).
pub const MAX_FEATURES_PER_LAYER: usize = 100;

// ── Karte ───────────────────────────────────────────────────────────

/// Ausgangsausschnitt: Namibia.
pub const HOME_EXTENT: LatLngBounds = LatLngBounds::new(
    Coordinate::new(-29.0, 11.5),
    Coordinate::new(-16.5, 25.5),
);

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `nam_geology_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    // ── Stil ────────────────────────────────────────────────────
    /// Farbe laufender Geometrie
    pub active_color: [f32; 4],
    /// Farbe abgeschlossener Geometrie
    pub completed_color: [f32; 4],
    /// Linienstärke in Pixeln
    pub line_weight: f32,
    /// Deckkraft der Polygon-Füllung
    pub fill_opacity: f32,
    /// Radius des Punkt-Markers in Pixeln
    pub marker_radius_px: f32,
    /// Deckkraft der Marker-Füllung
    pub marker_fill_opacity: f32,

    // ── Geodäsie ────────────────────────────────────────────────
    /// Kugelradius für Distanzen, Umfänge und Flächen (Meter)
    #[serde(default = "default_earth_radius_m")]
    pub earth_radius_m: f64,

    // ── Abfragen ────────────────────────────────────────────────
    /// Treffer-Toleranz bei Punkt-Selektion (Meter)
    #[serde(default = "default_point_query_tolerance_m")]
    pub point_query_tolerance_m: f64,
    /// Maximale Treffer pro Layer
    #[serde(default = "default_max_features_per_layer")]
    pub max_features_per_layer: usize,

    // ── Karte ───────────────────────────────────────────────────
    /// Ausschnitt für "Zoom auf Gesamtausdehnung"
    #[serde(default = "default_home_extent")]
    pub home_extent: LatLngBounds,
    /// Layer-Katalog (Reihenfolge = Panel-Reihenfolge)
    #[serde(default = "default_layer_defs")]
    pub layers: Vec<LayerDef>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            active_color: ACTIVE_COLOR,
            completed_color: COMPLETED_COLOR,
            line_weight: LINE_WEIGHT,
            fill_opacity: FILL_OPACITY,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_fill_opacity: MARKER_FILL_OPACITY,
            earth_radius_m: EARTH_RADIUS_M,
            point_query_tolerance_m: POINT_QUERY_TOLERANCE_M,
            max_features_per_layer: MAX_FEATURES_PER_LAYER,
            home_extent: HOME_EXTENT,
            layers: default_layer_defs(),
        }
    }
}

/// Serde-Default für `earth_radius_m` (Abwärtskompatibilität).
fn default_earth_radius_m() -> f64 {
    EARTH_RADIUS_M
}

/// Serde-Default für `point_query_tolerance_m`.
fn default_point_query_tolerance_m() -> f64 {
    POINT_QUERY_TOLERANCE_M
}

/// Serde-Default für `max_features_per_layer`.
fn default_max_features_per_layer() -> usize {
    MAX_FEATURES_PER_LAYER
}

fn default_home_extent() -> LatLngBounds {
    HOME_EXTENT
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("nam_geology_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("nam_geology_viewer.toml")
    }

    /// Layer-Katalog aus den konfigurierten Einträgen.
    pub fn layer_catalog(&self) -> LayerCatalog {
        LayerCatalog::from_defs(self.layers.iter().cloned())
    }

    /// Stil laufender Linien/Polygone (gestrichelt).
    pub fn active_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.active_color,
            weight: self.line_weight,
            dashed: true,
            fill_opacity: self.fill_opacity,
        }
    }

    /// Stil abgeschlossener Linien/Polygone (durchgezogen).
    pub fn completed_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.completed_color,
            weight: self.line_weight,
            dashed: false,
            fill_opacity: self.fill_opacity,
        }
    }

    /// Stil des Punkt-Selektions-Markers.
    pub fn marker_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.completed_color,
            weight: self.line_weight,
            dashed: false,
            fill_opacity: self.marker_fill_opacity,
        }
    }
}
