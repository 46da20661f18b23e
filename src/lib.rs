//! Namibia Geology Viewer Library.
//! Mess- und Selektionskern der Kartenansicht, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geojson;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CatalogFeatureLocator, FeatureLocator,
    InteractionSession, MapSurface, MeasureKind, MeasurementResult, OverlaySurface, SelectKind,
    SelectionResult, SessionMode, ViewerEvent,
};
pub use core::{
    active_layers, CatalogFeature, Coordinate, FeatureHit, LatLngBounds, LayerCatalog,
    LayerToggleState, SelectionGeometry,
};
pub use geojson::{load_feature_file, parse_feature_collection};
pub use shared::{format_area, format_distance, ViewerOptions};
