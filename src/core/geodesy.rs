//! Geodätische Hilfsfunktionen auf der Kugel: Großkreisdistanz und Polygonfläche.
//!
//! Alle Funktionen sind rein und arbeiten mit einem einzigen Erdradius,
//! damit Strecken, Umfänge und Flächen einer Messung zueinander passen.

use super::Coordinate;

/// Mittlerer Erdradius in Metern (Kugelmodell für Distanz und Fläche).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Meter pro Kilometer.
pub const METERS_PER_KILOMETER: f64 = 1_000.0;
/// Quadratmeter pro Hektar.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Großkreisdistanz in Metern (Haversine, mittlerer Erdradius).
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    distance_with_radius(a, b, EARTH_RADIUS_M)
}

/// Großkreisdistanz in Metern für einen beliebigen Kugelradius.
pub fn distance_with_radius(a: Coordinate, b: Coordinate, radius_m: f64) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rundungsfehler bei antipodalen Punkten abfangen
    let c = 2.0 * h.sqrt().min(1.0).asin();
    radius_m * c
}

/// Summe der Großkreisdistanzen aufeinanderfolgender Punkte (Meter).
pub fn path_length(points: &[Coordinate], radius_m: f64) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_with_radius(pair[0], pair[1], radius_m))
        .sum()
}

/// Umfang des implizit geschlossenen Rings (Meter).
///
/// Unter zwei Punkten gibt es keinen Ring; dann ist der Umfang die offene Pfadlänge.
pub fn ring_perimeter(ring: &[Coordinate], radius_m: f64) -> f64 {
    let open = path_length(ring, radius_m);
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 2 => {
            open + distance_with_radius(*last, *first, radius_m)
        }
        _ => open,
    }
}

/// Geodätische Polygonfläche in Quadratmetern (mittlerer Erdradius).
pub fn polygon_area(ring: &[Coordinate]) -> f64 {
    polygon_area_with_radius(ring, EARTH_RADIUS_M)
}

/// Sphärische Exzess-Summation über alle Kanten des implizit geschlossenen Rings.
///
/// Pro Kante (p1, p2): `(lng2 - lng1) * (2 + sin(lat1) + sin(lat2))` im Bogenmaß,
/// Gesamtsumme mal `R² / 2`, Betrag. Unter drei Punkten: 0.
pub fn polygon_area_with_radius(ring: &[Coordinate], radius_m: f64) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut previous = ring[ring.len() - 1];
    for &current in ring {
        sum += (current.lng - previous.lng).to_radians()
            * (2.0 + previous.lat.to_radians().sin() + current.lat.to_radians().sin());
        previous = current;
    }

    (sum * radius_m * radius_m / 2.0).abs()
}
