//! Core-Domänentypen: Koordinaten, Geodäsie, Layer-Katalog, Features.

pub mod coordinate;
pub mod feature;
/// Großkreisdistanz und sphärische Polygonfläche
pub mod geodesy;
pub mod layers;
pub mod spatial;

pub use coordinate::{Coordinate, LatLngBounds};
pub use feature::{CatalogFeature, FeatureGeometry, FeatureHit, SelectionGeometry};
pub use layers::{active_layers, LayerCatalog, LayerCategory, LayerDef, LayerToggleState};
