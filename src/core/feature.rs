//! Feature-Datensätze für Identifikation/Selektion.

use super::{Coordinate, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Geometrie eines Katalog-Features (Ringe implizit geschlossen).
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    /// Einzelpunkt (Mine, Ort, Denkmal)
    Point(Coordinate),
    /// Linienzug (Straße)
    LineString(Vec<Coordinate>),
    /// Polygon: äußerer Ring + Löcher
    Polygon {
        exterior: Vec<Coordinate>,
        holes: Vec<Vec<Coordinate>>,
    },
}

impl FeatureGeometry {
    /// Alle Stützpunkte (für Bounds).
    fn vertices(&self) -> Box<dyn Iterator<Item = &Coordinate> + '_> {
        match self {
            FeatureGeometry::Point(p) => Box::new(std::iter::once(p)),
            FeatureGeometry::LineString(points) => Box::new(points.iter()),
            FeatureGeometry::Polygon { exterior, .. } => Box::new(exterior.iter()),
        }
    }
}

/// Abfragbares Feature eines Quell-Layers.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFeature {
    /// Anzeigename
    pub name: String,
    /// Freitext-Detail (Typ, Gesteinsart, …)
    pub detail: String,
    /// Geometrie
    pub geometry: FeatureGeometry,
    bounds: LatLngBounds,
}

impl CatalogFeature {
    /// Erstellt ein Feature; `None` wenn die Geometrie keine Stützpunkte hat.
    pub fn new(
        name: impl Into<String>,
        detail: impl Into<String>,
        geometry: FeatureGeometry,
    ) -> Option<Self> {
        let vertices: Vec<Coordinate> = geometry.vertices().copied().collect();
        let bounds = LatLngBounds::from_points(&vertices)?;
        Some(Self {
            name: name.into(),
            detail: detail.into(),
            geometry,
            bounds,
        })
    }

    /// Umschließende Box (Vorfilter für Abfragen).
    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }
}

/// Geometrie einer abgeschlossenen Selektion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionGeometry {
    /// Polygon-Selektion (Ring in Klick-Reihenfolge, implizit geschlossen)
    Ring { points: Vec<Coordinate> },
    /// Punkt-Selektion
    Point { point: Coordinate },
}

impl SelectionGeometry {
    /// Umschließende Box der Selektion.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            SelectionGeometry::Ring { points } => LatLngBounds::from_points(points),
            SelectionGeometry::Point { point } => Some(LatLngBounds::new(*point, *point)),
        }
    }
}

/// Treffer einer Feature-Abfrage, wie er im Ergebnis-Panel erscheint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureHit {
    /// Quell-Layer (z.B. "nam_geology_app:minerals")
    pub layer: String,
    /// Anzeigename des Features
    pub name: String,
    /// Freitext-Detail
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_bounds_from_exterior() {
        let feature = CatalogFeature::new(
            "Erongo",
            "region",
            FeatureGeometry::Polygon {
                exterior: vec![
                    Coordinate::new(-22.0, 14.5),
                    Coordinate::new(-21.0, 16.0),
                    Coordinate::new(-22.5, 16.5),
                ],
                holes: vec![],
            },
        )
        .expect("Feature erwartet");

        assert_eq!(feature.bounds().south_west, Coordinate::new(-22.5, 14.5));
        assert_eq!(feature.bounds().north_east, Coordinate::new(-21.0, 16.5));
    }

    #[test]
    fn test_feature_without_vertices_is_rejected() {
        assert!(CatalogFeature::new("leer", "", FeatureGeometry::LineString(vec![])).is_none());
    }

    #[test]
    fn test_selection_geometry_serializes_tagged() {
        let geometry = SelectionGeometry::Point {
            point: Coordinate::new(-22.0, 17.0),
        };
        let json = serde_json::to_value(&geometry).expect("JSON erwartet");
        assert_eq!(json["type"], "point");
        assert_eq!(json["point"]["lat"], -22.0);
    }
}
