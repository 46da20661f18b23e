//! Parser für GeoJSON-FeatureCollections (WFS `outputFormat=application/json`).

use crate::core::{CatalogFeature, Coordinate, FeatureGeometry};
use anyhow::{bail, Context, Result};
use geojson::feature::Id;
use geojson::{Feature, JsonObject};
use serde::Deserialize;
use serde_json::Value;

/// Eigenschaften, aus denen das Detail-Feld gelesen wird (erste vorhandene gewinnt).
const DETAIL_PROPERTIES: [&str; 4] = ["type", "rock_type", "geology_type", "category"];
/// Eigenschaften, aus denen der Anzeigename gelesen wird.
const NAME_PROPERTIES: [&str; 2] = ["name", "NAME"];

/// Äußere Hülle; Features bleiben rohes JSON und werden einzeln gelesen.
#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Value>,
}

/// Liest alle Features einer FeatureCollection.
///
/// Multi-Geometrien werden in Einzelteile mit gleichem Namen zerlegt.
/// Features ohne verwertbare Geometrie werden mit Warnung übersprungen,
/// ebenso einzelne Features, die kein gültiges GeoJSON sind.
pub fn parse_feature_collection(json: &str) -> Result<Vec<CatalogFeature>> {
    let collection: RawCollection =
        serde_json::from_str(json).context("GeoJSON konnte nicht gelesen werden")?;
    if collection.kind != "FeatureCollection" {
        bail!("GeoJSON-Typ '{}' statt FeatureCollection", collection.kind);
    }

    let mut features = Vec::with_capacity(collection.features.len());
    for (index, raw) in collection.features.into_iter().enumerate() {
        let feature: Feature = match serde_json::from_value(raw) {
            Ok(feature) => feature,
            Err(e) => {
                log::warn!("Feature {} übersprungen: {}", index + 1, e);
                continue;
            }
        };

        let properties = feature.properties.unwrap_or_default();
        let name = feature_name(feature.id.as_ref(), &properties, index);
        let detail = feature_detail(&properties);

        let Some(geometry) = feature.geometry else {
            log::warn!("Feature '{}' ohne Geometrie übersprungen", name);
            continue;
        };

        let parts = convert_geometry(&geometry.value);
        if parts.is_empty() {
            log::warn!(
                "Feature '{}' mit nicht unterstützter oder ungültiger Geometrie übersprungen",
                name
            );
            continue;
        }
        features.extend(
            parts
                .into_iter()
                .filter_map(|part| CatalogFeature::new(name.clone(), detail.clone(), part)),
        );
    }

    Ok(features)
}

/// Anzeigename: Namens-Eigenschaft, sonst Feature-ID, sonst "Feature n".
fn feature_name(id: Option<&Id>, properties: &JsonObject, index: usize) -> String {
    NAME_PROPERTIES
        .iter()
        .find_map(|key| properties.get(*key).and_then(value_text))
        .or_else(|| match id {
            Some(Id::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Id::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Feature {}", index + 1))
}

/// Detail: erste vorhandene Typ-Eigenschaft, sonst "N/A".
fn feature_detail(properties: &JsonObject) -> String {
    DETAIL_PROPERTIES
        .iter()
        .find_map(|key| properties.get(*key).and_then(value_text))
        .unwrap_or_else(|| "N/A".to_owned())
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// GeoJSON-Position `[lng, lat, ...]` → Koordinate.
fn position(raw: &[f64]) -> Option<Coordinate> {
    match raw {
        [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some(Coordinate::new(*lat, *lng)),
        _ => None,
    }
}

fn positions(raw: &[Vec<f64>]) -> Option<Vec<Coordinate>> {
    raw.iter().map(|p| position(p)).collect()
}

/// Ring ohne doppelten Schlusspunkt (Ringe sind intern implizit geschlossen).
fn ring(raw: &[Vec<f64>]) -> Option<Vec<Coordinate>> {
    let mut points = positions(raw)?;
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    (points.len() >= 3).then_some(points)
}

fn polygon(raw: &[Vec<Vec<f64>>]) -> Option<FeatureGeometry> {
    let (exterior, holes) = raw.split_first()?;
    Some(FeatureGeometry::Polygon {
        exterior: ring(exterior)?,
        holes: holes.iter().filter_map(|h| ring(h)).collect(),
    })
}

fn line(raw: &[Vec<f64>]) -> Option<FeatureGeometry> {
    let points = positions(raw)?;
    (points.len() >= 2).then_some(FeatureGeometry::LineString(points))
}

fn convert_geometry(geometry: &geojson::Value) -> Vec<FeatureGeometry> {
    use geojson::Value as Geo;
    match geometry {
        Geo::Point(p) => position(p).map(FeatureGeometry::Point).into_iter().collect(),
        Geo::MultiPoint(points) => points
            .iter()
            .filter_map(|p| position(p).map(FeatureGeometry::Point))
            .collect(),
        Geo::LineString(points) => line(points).into_iter().collect(),
        Geo::MultiLineString(lines) => lines.iter().filter_map(|l| line(l)).collect(),
        Geo::Polygon(rings) => polygon(rings).into_iter().collect(),
        Geo::MultiPolygon(polygons) => polygons.iter().filter_map(|p| polygon(p)).collect(),
        // Abfragen kennen keine Sammel-Geometrien
        Geo::GeometryCollection(_) => Vec::new(),
    }
}
