//! Feature-Abfrage für abgeschlossene Selektionen.
//!
//! `FeatureLocator` ist die Abfragegrenze; `CatalogFeatureLocator` beantwortet
//! sie gegen Features, die pro Quell-Layer aus GeoJSON geladen wurden.

use crate::core::geodesy::EARTH_RADIUS_M;
use crate::core::spatial::{
    point_in_ring, point_path_distance_m, ring_intersects_path, ring_within, rings_intersect,
};
use crate::core::{
    CatalogFeature, Coordinate, FeatureGeometry, FeatureHit, LatLngBounds, SelectionGeometry,
};
use crate::shared::options::{MAX_FEATURES_PER_LAYER, POINT_QUERY_TOLERANCE_M};
use crate::shared::ViewerOptions;
use indexmap::IndexMap;
use std::path::Path;

/// Abfrage: welche Features der aktiven Layer treffen die Selektion?
pub trait FeatureLocator {
    /// Treffer in Layer-Reihenfolge, innerhalb eines Layers in Feature-Reihenfolge.
    fn query(&self, geometry: &SelectionGeometry, active_layers: &[String]) -> Vec<FeatureHit>;

    /// Toleranz und Limits aus geänderten Optionen übernehmen.
    fn apply_options(&mut self, _options: &ViewerOptions) {}
}

/// In-Process-Locator über geladene Feature-Layer.
#[derive(Debug, Clone)]
pub struct CatalogFeatureLocator {
    layers: IndexMap<String, Vec<CatalogFeature>>,
    point_query_tolerance_m: f64,
    max_features_per_layer: usize,
    earth_radius_m: f64,
}

impl Default for CatalogFeatureLocator {
    fn default() -> Self {
        Self {
            layers: IndexMap::new(),
            point_query_tolerance_m: POINT_QUERY_TOLERANCE_M,
            max_features_per_layer: MAX_FEATURES_PER_LAYER,
            earth_radius_m: EARTH_RADIUS_M,
        }
    }
}

impl CatalogFeatureLocator {
    /// Erstellt einen leeren Locator mit Toleranz und Limit aus `options`.
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            layers: IndexMap::new(),
            point_query_tolerance_m: options.point_query_tolerance_m,
            max_features_per_layer: options.max_features_per_layer,
            earth_radius_m: options.earth_radius_m,
        }
    }

    /// Hängt Features an den Quell-Layer `source_layer` an.
    pub fn insert_layer(&mut self, source_layer: impl Into<String>, features: Vec<CatalogFeature>) {
        self.layers
            .entry(source_layer.into())
            .or_default()
            .extend(features);
    }

    /// Lädt eine GeoJSON-Datei als Quell-Layer.
    pub fn load_layer_file(&mut self, source_layer: &str, path: &Path) -> anyhow::Result<usize> {
        let features = crate::geojson::load_feature_file(path)?;
        let count = features.len();
        self.insert_layer(source_layer, features);
        Ok(count)
    }

    /// Anzahl Features eines Quell-Layers.
    pub fn feature_count(&self, source_layer: &str) -> usize {
        self.layers.get(source_layer).map_or(0, Vec::len)
    }

    /// Vorfilter-Box der Abfrage.
    fn query_bounds(&self, geometry: &SelectionGeometry) -> Option<LatLngBounds> {
        let bounds = geometry.bounds()?;
        match geometry {
            SelectionGeometry::Ring { .. } => Some(bounds),
            SelectionGeometry::Point { point } => {
                let meters_per_degree = self.earth_radius_m.to_radians();
                let lat_scale = point.lat.to_radians().cos().abs().max(0.01);
                let margin = self.point_query_tolerance_m / (meters_per_degree * lat_scale);
                Some(bounds.padded(margin))
            }
        }
    }

    /// Exakter Treffer-Test eines Features.
    fn hits(&self, feature: &CatalogFeature, geometry: &SelectionGeometry) -> bool {
        match geometry {
            SelectionGeometry::Ring { points: ring } => hits_ring(feature, ring),
            SelectionGeometry::Point { point } => self.hits_point(feature, *point),
        }
    }

    fn hits_point(&self, feature: &CatalogFeature, point: Coordinate) -> bool {
        match &feature.geometry {
            FeatureGeometry::Polygon { exterior, holes } => {
                point_in_ring(point, exterior)
                    && !holes.iter().any(|hole| point_in_ring(point, hole))
            }
            FeatureGeometry::Point(p) => {
                point_path_distance_m(point, std::slice::from_ref(p), self.earth_radius_m)
                    <= self.point_query_tolerance_m
            }
            FeatureGeometry::LineString(path) => {
                point_path_distance_m(point, path, self.earth_radius_m)
                    <= self.point_query_tolerance_m
            }
        }
    }
}

fn hits_ring(feature: &CatalogFeature, ring: &[Coordinate]) -> bool {
    match &feature.geometry {
        FeatureGeometry::Point(p) => point_in_ring(*p, ring),
        FeatureGeometry::LineString(path) => ring_intersects_path(ring, path),
        // Eine Selektion ganz in einem Loch trifft das Polygon nicht
        FeatureGeometry::Polygon { exterior, holes } => {
            rings_intersect(exterior, ring) && !holes.iter().any(|hole| ring_within(ring, hole))
        }
    }
}

impl FeatureLocator for CatalogFeatureLocator {
    fn query(&self, geometry: &SelectionGeometry, active_layers: &[String]) -> Vec<FeatureHit> {
        let Some(bounds) = self.query_bounds(geometry) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        for layer in active_layers {
            let Some(features) = self.layers.get(layer) else {
                log::debug!("Keine Features für Layer {layer} geladen");
                continue;
            };
            let hits = features
                .iter()
                .filter(|feature| feature.bounds().intersects(&bounds))
                .filter(|feature| self.hits(feature, geometry))
                .take(self.max_features_per_layer)
                .map(|feature| FeatureHit {
                    layer: layer.clone(),
                    name: feature.name.clone(),
                    detail: feature.detail.clone(),
                });
            found.extend(hits);
        }

        log::debug!("Abfrage über {} Layer: {} Treffer", active_layers.len(), found.len());
        found
    }

    fn apply_options(&mut self, options: &ViewerOptions) {
        self.point_query_tolerance_m = options.point_query_tolerance_m;
        self.max_features_per_layer = options.max_features_per_layer;
        self.earth_radius_m = options.earth_radius_m;
    }
}
