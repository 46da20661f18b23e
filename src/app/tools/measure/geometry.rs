//! Reine Berechnungen der Messung: Ergebnisse und Label-Texte.

use super::state::{MeasureKind, MeasureUnit, MeasurementResult};
use crate::core::geodesy::{
    distance_with_radius, path_length, polygon_area_with_radius, ring_perimeter,
    METERS_PER_KILOMETER, SQUARE_METERS_PER_HECTARE,
};
use crate::core::Coordinate;
use crate::shared::{format_area, format_distance, LabelAnchor};

const COMPLETE_HINT: &str = "Double-click to complete";
pub(crate) const FIRST_POINT_HINT: &str = "Click to continue measuring";

/// Gesamtstrecke in km.
pub(crate) fn total_km(points: &[Coordinate], radius_m: f64) -> f64 {
    path_length(points, radius_m) / METERS_PER_KILOMETER
}

/// Länge des letzten Segments in km (`None` unter zwei Punkten).
pub(crate) fn last_segment_km(points: &[Coordinate], radius_m: f64) -> Option<f64> {
    match points {
        [.., a, b] => Some(distance_with_radius(*a, *b, radius_m) / METERS_PER_KILOMETER),
        _ => None,
    }
}

/// Fläche des geschlossenen Rings in ha.
pub(crate) fn area_ha(ring: &[Coordinate], radius_m: f64) -> f64 {
    polygon_area_with_radius(ring, radius_m) / SQUARE_METERS_PER_HECTARE
}

/// Umfang des geschlossenen Rings in km.
pub(crate) fn perimeter_km(ring: &[Coordinate], radius_m: f64) -> f64 {
    ring_perimeter(ring, radius_m) / METERS_PER_KILOMETER
}

/// Berechnet die `measure-finish`-Nutzlast für eingefrorene Punkte.
pub(crate) fn build_result(
    kind: MeasureKind,
    points: &[Coordinate],
    radius_m: f64,
) -> MeasurementResult {
    match kind {
        MeasureKind::Distance => MeasurementResult {
            kind,
            points: points.to_vec(),
            total: total_km(points, radius_m),
            last_segment: last_segment_km(points, radius_m),
            perimeter: None,
            unit: MeasureUnit::Kilometers,
        },
        MeasureKind::Area => MeasurementResult {
            kind,
            points: points.to_vec(),
            total: area_ha(points, radius_m),
            last_segment: None,
            perimeter: Some(perimeter_km(points, radius_m)),
            unit: MeasureUnit::Hectares,
        },
    }
}

/// Text des Live-Labels für die aktuelle (ggf. Rubber-Band-)Geometrie.
pub(crate) fn live_label_text(kind: MeasureKind, geometry: &[Coordinate], radius_m: f64) -> String {
    match kind {
        MeasureKind::Distance if geometry.len() >= 2 => {
            let segment = last_segment_km(geometry, radius_m).unwrap_or_default();
            format!(
                "Total: {}\nSegment: {}\n{COMPLETE_HINT}",
                format_distance(total_km(geometry, radius_m)),
                format_distance(segment),
            )
        }
        MeasureKind::Area if geometry.len() >= 3 => format!(
            "Area: {}\nPerimeter: {}\n{COMPLETE_HINT}",
            format_area(area_ha(geometry, radius_m)),
            format_distance(perimeter_km(geometry, radius_m)),
        ),
        _ => COMPLETE_HINT.to_owned(),
    }
}

/// Text und Ausrichtung des permanenten Ergebnis-Labels.
pub(crate) fn result_label(result: &MeasurementResult) -> (String, LabelAnchor) {
    match result.kind {
        MeasureKind::Distance => (
            format!("Total: {}", format_distance(result.total)),
            LabelAnchor::Top,
        ),
        MeasureKind::Area => (
            format!("Area: {}", format_area(result.total)),
            LabelAnchor::Center,
        ),
    }
}
