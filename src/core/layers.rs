//! Thematischer Layer-Katalog und Schalter-Zustand.
//!
//! Geologie-Layer sind exklusiv (Radio-Gruppe), Orientierungs-Layer frei
//! kombinierbar (Checkbox-Gruppe). Welche Layer aktiv sind, ergibt sich rein
//! aus Katalog + Schalter-Zustand über [`active_layers`].

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Layer-Gruppe im Layer-Panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerCategory {
    /// Geologische Themenkarten (genau eine aktiv)
    Geology,
    /// Orientierungs-/Referenzlayer (beliebig viele aktiv)
    Orientation,
}

/// Eintrag im Layer-Katalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDef {
    /// Schalter-ID im Layer-Panel (z.B. "geology-age")
    pub id: String,
    /// Anzeigename
    pub title: String,
    /// Gruppe (Radio oder Checkbox)
    pub category: LayerCategory,
    /// Layer-Name beim Kartendienst (WMS/WFS), z.B. "namibia:geology_age"
    pub source_layer: String,
}

impl LayerDef {
    fn new(id: &str, title: &str, category: LayerCategory, source_layer: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            category,
            source_layer: source_layer.to_owned(),
        }
    }
}

/// Geordneter Katalog aller schaltbaren Themenlayer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerCatalog {
    layers: IndexMap<String, LayerDef>,
}

impl LayerCatalog {
    /// Baut einen Katalog; doppelte IDs überschreiben frühere Einträge.
    pub fn from_defs(defs: impl IntoIterator<Item = LayerDef>) -> Self {
        let mut layers = IndexMap::new();
        for def in defs {
            if let Some(previous) = layers.insert(def.id.clone(), def) {
                log::warn!("Layer-ID doppelt im Katalog: {}", previous.id);
            }
        }
        Self { layers }
    }

    /// Standard-Katalog des Geological Survey of Namibia.
    pub fn namibia_default() -> Self {
        Self::from_defs(default_layer_defs())
    }

    /// Sucht einen Eintrag per Schalter-ID.
    pub fn get(&self, id: &str) -> Option<&LayerDef> {
        self.layers.get(id)
    }

    /// Alle Einträge in Katalog-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &LayerDef> {
        self.layers.values()
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Gibt `true` zurück, wenn der Katalog leer ist.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Prüft ob `id` existiert und zur Gruppe `category` gehört.
    pub fn is_in_category(&self, id: &str, category: LayerCategory) -> bool {
        self.get(id).is_some_and(|def| def.category == category)
    }
}

/// Geologie-Layer: (ID, Titel, Quell-Layer).
const GEOLOGY_LAYERS: [(&str, &str, &str); 4] = [
    ("major-geological-units", "Major Geological Units", "nam_geology_app:geology_1m"),
    ("geology-age", "Geology Age", "namibia:geology_age"),
    ("dominant-rock-types", "Dominant Rock Types", "namibia:dominant_rock_types"),
    ("minerals", "Minerals", "nam_geology_app:minerals"),
];

/// Orientierungs-Layer: (ID, Titel, Quell-Layer).
const ORIENTATION_LAYERS: [(&str, &str, &str); 6] = [
    ("towns-villages", "Towns & Villages", "nam_geology_app:towns_villages"),
    ("national-monuments", "National Monuments", "namibia:national_monuments"),
    ("geotourism-sites", "Geotourism Sites", "namibia:geotourism_sites"),
    ("national-roads", "National Roads", "nam_geology_app:main_roads"),
    ("protected-areas", "Protected Areas", "nam_geology_app:protected_areas"),
    ("regional-boundaries", "Regional Boundaries", "nam_geology_app:regions"),
];

/// Standard-Layer (WMS-Namen wie auf dem GeoServer der Survey).
pub fn default_layer_defs() -> Vec<LayerDef> {
    let geology = GEOLOGY_LAYERS
        .iter()
        .map(|&(id, title, source)| LayerDef::new(id, title, LayerCategory::Geology, source));
    let orientation = ORIENTATION_LAYERS
        .iter()
        .map(|&(id, title, source)| LayerDef::new(id, title, LayerCategory::Orientation, source));
    geology.chain(orientation).collect()
}

/// Aktueller Zustand der Layer-Schalter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerToggleState {
    /// Gewählter Geologie-Layer (Radio)
    pub geology: Option<String>,
    /// Eingeschaltete Orientierungs-Layer (Checkboxen, Einschalt-Reihenfolge)
    pub orientation: IndexSet<String>,
}

impl LayerToggleState {
    /// Erstellt einen Zustand ohne aktive Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wählt einen Geologie-Layer; ersetzt die bisherige Wahl.
    pub fn select_geology(&mut self, id: impl Into<String>) {
        self.geology = Some(id.into());
    }

    /// Hebt die Geologie-Auswahl auf.
    pub fn clear_geology(&mut self) {
        self.geology = None;
    }

    /// Schaltet einen Orientierungs-Layer ein oder aus.
    pub fn set_orientation(&mut self, id: impl Into<String>, enabled: bool) {
        let id = id.into();
        if enabled {
            self.orientation.insert(id);
        } else {
            self.orientation.shift_remove(&id);
        }
    }

    /// Ist der Schalter mit dieser ID an?
    pub fn is_enabled(&self, id: &str) -> bool {
        self.geology.as_deref() == Some(id) || self.orientation.contains(id)
    }
}

/// Quell-Layer aller eingeschalteten Themenlayer.
///
/// Reihenfolge: Geologie zuerst, dann Orientierungs-Layer in Katalog-Reihenfolge.
/// IDs, die der Katalog nicht kennt oder die in der falschen Gruppe stehen, fallen weg.
pub fn active_layers(catalog: &LayerCatalog, toggles: &LayerToggleState) -> Vec<String> {
    let geology = toggles
        .geology
        .as_deref()
        .and_then(|id| catalog.get(id))
        .filter(|def| def.category == LayerCategory::Geology)
        .map(|def| def.source_layer.clone());

    let orientation = catalog
        .iter()
        .filter(|def| def.category == LayerCategory::Orientation)
        .filter(|def| toggles.orientation.contains(&def.id))
        .map(|def| def.source_layer.clone());

    geology.into_iter().chain(orientation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_both_groups() {
        let catalog = LayerCatalog::namibia_default();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.is_in_category("minerals", LayerCategory::Geology));
        assert!(catalog.is_in_category("national-roads", LayerCategory::Orientation));
        assert!(!catalog.is_in_category("minerals", LayerCategory::Orientation));
        assert_eq!(
            catalog.get("regional-boundaries").map(|d| d.source_layer.as_str()),
            Some("nam_geology_app:regions")
        );
    }

    #[test]
    fn test_geology_selection_is_exclusive() {
        let mut toggles = LayerToggleState::new();
        toggles.select_geology("geology-age");
        toggles.select_geology("minerals");
        assert!(toggles.is_enabled("minerals"));
        assert!(!toggles.is_enabled("geology-age"));
    }

    #[test]
    fn test_active_layers_geology_first_then_catalog_order() {
        let catalog = LayerCatalog::namibia_default();
        let mut toggles = LayerToggleState::new();
        toggles.set_orientation("regional-boundaries", true);
        toggles.set_orientation("towns-villages", true);
        toggles.select_geology("geology-age");

        assert_eq!(
            active_layers(&catalog, &toggles),
            vec![
                "namibia:geology_age".to_string(),
                "nam_geology_app:towns_villages".to_string(),
                "nam_geology_app:regions".to_string(),
            ]
        );
    }

    #[test]
    fn test_active_layers_skips_unknown_and_disabled() {
        let catalog = LayerCatalog::namibia_default();
        let mut toggles = LayerToggleState::new();
        toggles.select_geology("does-not-exist");
        toggles.set_orientation("protected-areas", true);
        toggles.set_orientation("protected-areas", false);
        toggles.set_orientation("minerals", true);

        assert!(active_layers(&catalog, &toggles).is_empty());
    }

    #[test]
    fn test_duplicate_ids_keep_last_definition() {
        let mut defs = default_layer_defs();
        defs.push(LayerDef::new("minerals", "Minerale", LayerCategory::Geology, "x:minerals"));
        let catalog = LayerCatalog::from_defs(defs);
        assert_eq!(catalog.len(), 10);
        assert_eq!(
            catalog.get("minerals").map(|d| d.source_layer.as_str()),
            Some("x:minerals")
        );
    }
}
