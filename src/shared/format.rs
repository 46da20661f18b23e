//! Anzeigeformat für Messwerte (Live-Label, festes Label, Panel).

/// Formatiert eine Strecke in Kilometern.
///
/// Unter 1 km in Metern mit einer Nachkommastelle, sonst Kilometer mit zwei.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.1} m", km * 1_000.0)
    } else {
        format!("{:.2} km", km)
    }
}

/// Formatiert eine Fläche in Hektar.
///
/// Unter 1 ha in Quadratmetern mit einer Nachkommastelle, sonst Hektar mit zwei.
pub fn format_area(hectares: f64) -> String {
    if hectares < 1.0 {
        format!("{:.1} m²", hectares * 10_000.0)
    } else {
        format!("{:.2} ha", hectares)
    }
}
