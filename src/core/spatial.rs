//! Planare Prädikate in Grad-Koordinaten (x = Länge, y = Breite).
//!
//! Reicht für Treffer-Tests auf Landesmaßstab; Distanzen in Metern werden
//! über eine lokale äquirektanguläre Projektion um den Abfragepunkt gebildet.

use super::Coordinate;
use glam::DVec2;

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    if ab.perp_dot(ap).abs() > 1e-12 {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines implizit geschlossenen Rings liegt (Ray-Casting, inkl. Rand).
pub fn point_in_ring(point: Coordinate, ring: &[Coordinate]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let p = point.to_dvec2();
    let mut inside = false;
    let mut previous = ring[ring.len() - 1].to_dvec2();

    for current in ring.iter().map(|c| c.to_dvec2()) {
        if point_on_segment(p, previous, current) {
            return true;
        }

        let crosses = ((current.y > p.y) != (previous.y > p.y))
            && (p.x
                < (previous.x - current.x) * (p.y - current.y) / (previous.y - current.y)
                    + current.x);
        if crosses {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Orientierung des Tripels (a, b, c): >0 links, <0 rechts, 0 kollinear.
fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Schneiden oder berühren sich die Segmente (a1, a2) und (b1, b2)?
pub fn segments_intersect(a1: Coordinate, a2: Coordinate, b1: Coordinate, b2: Coordinate) -> bool {
    let (p1, p2, q1, q2) = (a1.to_dvec2(), a2.to_dvec2(), b1.to_dvec2(), b2.to_dvec2());
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && point_on_segment(p1, q1, q2))
        || (d2 == 0.0 && point_on_segment(p2, q1, q2))
        || (d3 == 0.0 && point_on_segment(q1, p1, p2))
        || (d4 == 0.0 && point_on_segment(q2, p1, p2))
}

/// Kanten eines Pfads; bei `closed` inklusive Schlusskante.
fn edges(
    points: &[Coordinate],
    closed: bool,
) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
    let closing = if closed && points.len() > 2 {
        Some((points[points.len() - 1], points[0]))
    } else {
        None
    };
    points
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing)
}

/// Berührt ein offener Pfad den Ring (Stützpunkt innen oder Kantenschnitt)?
pub fn ring_intersects_path(ring: &[Coordinate], path: &[Coordinate]) -> bool {
    if ring.len() < 3 || path.is_empty() {
        return false;
    }
    if path.iter().any(|&p| point_in_ring(p, ring)) {
        return true;
    }
    edges(path, false).any(|(a, b)| {
        edges(ring, true).any(|(r1, r2)| segments_intersect(a, b, r1, r2))
    })
}

/// Überlappen sich zwei Ringe (Enthaltensein in beide Richtungen oder Kantenschnitt)?
pub fn rings_intersect(a: &[Coordinate], b: &[Coordinate]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    if a.iter().any(|&p| point_in_ring(p, b)) || b.iter().any(|&p| point_in_ring(p, a)) {
        return true;
    }
    edges(a, true).any(|(a1, a2)| {
        edges(b, true).any(|(b1, b2)| segments_intersect(a1, a2, b1, b2))
    })
}

/// Liegt `inner` vollständig in `outer` (alle Stützpunkte innen, keine Kante berührt den Rand)?
pub fn ring_within(inner: &[Coordinate], outer: &[Coordinate]) -> bool {
    if inner.len() < 3 || outer.len() < 3 {
        return false;
    }
    inner.iter().all(|&p| point_in_ring(p, outer))
        && !edges(inner, true).any(|(a1, a2)| {
            edges(outer, true).any(|(b1, b2)| segments_intersect(a1, a2, b1, b2))
        })
}

/// Projiziert `c` in Meter relativ zu `origin` (äquirektangulär).
fn local_meters(origin: Coordinate, c: Coordinate, radius_m: f64) -> DVec2 {
    let scale = radius_m * std::f64::consts::PI / 180.0;
    DVec2::new(
        (c.lng - origin.lng) * origin.lat.to_radians().cos() * scale,
        (c.lat - origin.lat) * scale,
    )
}

/// Näherungsweiser Abstand in Metern zwischen Punkt und Segment.
pub fn point_segment_distance_m(
    point: Coordinate,
    a: Coordinate,
    b: Coordinate,
    radius_m: f64,
) -> f64 {
    let pa = local_meters(point, a, radius_m);
    let pb = local_meters(point, b, radius_m);
    let ab = pb - pa;
    let len_sq = ab.length_squared();
    let t = if len_sq > 0.0 {
        (-pa).dot(ab) / len_sq
    } else {
        0.0
    };
    (pa + ab * t.clamp(0.0, 1.0)).length()
}

/// Kleinster Abstand in Metern zwischen Punkt und offenem Pfad (`f64::INFINITY` bei leerem Pfad).
pub fn point_path_distance_m(point: Coordinate, path: &[Coordinate], radius_m: f64) -> f64 {
    match path {
        [] => f64::INFINITY,
        [single] => point_segment_distance_m(point, *single, *single, radius_m),
        _ => edges(path, false)
            .map(|(a, b)| point_segment_distance_m(point, a, b, radius_m))
            .fold(f64::INFINITY, f64::min),
    }
}
