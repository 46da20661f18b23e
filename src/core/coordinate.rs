//! Geografische Koordinaten (WGS84, Grad) und Bounding-Boxen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geografische Position in Grad. Unveränderlicher Werttyp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Breitengrad (Süden negativ)
    pub lat: f64,
    /// Längengrad (Westen negativ)
    pub lng: f64,
}

impl Coordinate {
    /// Erstellt eine Koordinate aus Breite und Länge.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planare Darstellung für Prädikate: x = Länge, y = Breite.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Umkehrung von [`Coordinate::to_dvec2`].
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.y, v.x)
    }
}

/// Achsenparallele Box in Grad (Südwest/Nordost-Ecke).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    /// Südwest-Ecke (min lat, min lng)
    pub south_west: Coordinate,
    /// Nordost-Ecke (max lat, max lng)
    pub north_east: Coordinate,
}

impl LatLngBounds {
    /// Erstellt eine Box aus zwei Ecken.
    pub const fn new(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Umschließende Box einer Punktfolge; `None` bei leerer Eingabe.
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Erweitert die Box um einen Punkt.
    pub fn extend(&mut self, point: Coordinate) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Mittelpunkt der Box (Label-Position fertiger Messungen).
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Liegt der Punkt in der Box (inkl. Rand)?
    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Überlappen sich die beiden Boxen (Berührung zählt)?
    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        self.south_west.lat <= other.north_east.lat
            && self.north_east.lat >= other.south_west.lat
            && self.south_west.lng <= other.north_east.lng
            && self.north_east.lng >= other.south_west.lng
    }

    /// Vergrößert die Box um `margin_deg` in alle Richtungen.
    pub fn padded(&self, margin_deg: f64) -> Self {
        Self::new(
            Coordinate::new(
                self.south_west.lat - margin_deg,
                self.south_west.lng - margin_deg,
            ),
            Coordinate::new(
                self.north_east.lat + margin_deg,
                self.north_east.lng + margin_deg,
            ),
        )
    }
}
