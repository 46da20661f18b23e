//! GeoJSON-Import für abfragbare Feature-Layer.

mod parser;

pub use parser::parse_feature_collection;

use crate::core::CatalogFeature;
use anyhow::Context;
use std::path::Path;

/// Liest eine GeoJSON-Datei und gibt alle verwertbaren Features zurück.
pub fn load_feature_file(path: &Path) -> anyhow::Result<Vec<CatalogFeature>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("GeoJSON-Datei nicht lesbar: {}", path.display()))?;
    let features = parse_feature_collection(&content)
        .with_context(|| format!("GeoJSON-Datei fehlerhaft: {}", path.display()))?;
    log::info!("{} Features geladen aus {}", features.len(), path.display());
    Ok(features)
}
