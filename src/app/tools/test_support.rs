//! Test-Gerüst: besitzt alles, was ein `SessionContext` ausleiht.

use super::SessionContext;
use crate::app::events::ViewerEvent;
use crate::app::locator::{CatalogFeatureLocator, FeatureLocator};
use crate::app::surface::OverlaySurface;
use crate::core::{CatalogFeature, FeatureHit, LayerCatalog, LayerToggleState, SelectionGeometry};
use crate::shared::OverlayPrimitive;
use std::cell::Cell;

/// Katalog-Locator, der seine Abfragen mitzählt.
#[derive(Default)]
pub(crate) struct CountingLocator {
    inner: CatalogFeatureLocator,
    calls: Cell<usize>,
}

impl CountingLocator {
    pub fn insert_layer(&mut self, source_layer: &str, features: Vec<CatalogFeature>) {
        self.inner.insert_layer(source_layer, features);
    }

    /// Bisherige Anzahl `query`-Aufrufe.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl FeatureLocator for CountingLocator {
    fn query(&self, geometry: &SelectionGeometry, active_layers: &[String]) -> Vec<FeatureHit> {
        self.calls.set(self.calls.get() + 1);
        self.inner.query(geometry, active_layers)
    }
}

pub(crate) struct SessionHarness {
    pub surface: OverlaySurface,
    pub events: Vec<ViewerEvent>,
    pub locator: CountingLocator,
    pub catalog: LayerCatalog,
    pub toggles: LayerToggleState,
}

impl SessionHarness {
    pub fn new() -> Self {
        Self {
            surface: OverlaySurface::new(),
            events: Vec::new(),
            locator: CountingLocator::default(),
            catalog: LayerCatalog::namibia_default(),
            toggles: LayerToggleState::new(),
        }
    }

    pub fn ctx(&mut self) -> SessionContext<'_> {
        SessionContext {
            surface: &mut self.surface,
            events: &mut self.events,
            locator: &self.locator,
            catalog: &self.catalog,
            toggles: &self.toggles,
        }
    }

    /// Text des Live-Labels, falls vorhanden.
    pub fn live_label_text(&self) -> Option<String> {
        self.surface.primitives().find_map(|(_, entry)| match &entry.primitive {
            OverlayPrimitive::Label {
                text,
                permanent: false,
                ..
            } => Some(text.clone()),
            _ => None,
        })
    }

    /// Alle permanenten Labels.
    pub fn permanent_labels(&self) -> Vec<&OverlayPrimitive> {
        self.surface
            .primitives()
            .map(|(_, entry)| &entry.primitive)
            .filter(|p| matches!(p, OverlayPrimitive::Label { permanent: true, .. }))
            .collect()
    }
}
