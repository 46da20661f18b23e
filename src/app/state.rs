//! Application State: zentrale Datenhaltung.
//!
//! Besitzt beide Sessions, die Kartenoberfläche, die Layer-Schalter und
//! den Ereignis-Ausgang. Sessions bekommen nur geliehene Teile davon.

use super::events::ViewerEvent;
use super::locator::{CatalogFeatureLocator, FeatureLocator};
use super::surface::OverlaySurface;
use super::tools::{MeasurementSession, SelectionSession, SessionContext};
use super::CommandLog;
use crate::core::{LayerCatalog, LayerToggleState};
use crate::shared::ViewerOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Strecken-/Flächenmessung
    pub measurement: MeasurementSession,
    /// Räumliche Selektion
    pub selection: SelectionSession,
    /// Layer-Schalter (Radio + Checkboxen)
    pub layers: LayerToggleState,
    /// Layer-Katalog aus den Optionen
    pub catalog: LayerCatalog,
    /// Overlay-Ebene der Karte
    pub surface: OverlaySurface,
    /// Feature-Abfrage für Selektionen
    pub locator: Box<dyn FeatureLocator>,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Noch nicht abgeholte Benachrichtigungen
    pub events: Vec<ViewerEvent>,
    /// Command-Log
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen und leerem Locator.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            measurement: MeasurementSession::new(&options),
            selection: SelectionSession::new(&options),
            layers: LayerToggleState::new(),
            catalog: options.layer_catalog(),
            surface: OverlaySurface::new(),
            locator: Box::new(CatalogFeatureLocator::new(&options)),
            options,
            events: Vec::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Ersetzt den Feature-Locator.
    pub fn set_locator(&mut self, locator: Box<dyn FeatureLocator>) {
        self.locator = locator;
    }

    /// Gibt alle seit dem letzten Aufruf erzeugten Benachrichtigungen zurück.
    pub fn drain_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Messung plus geliehener Kontext.
    pub fn measurement_parts(&mut self) -> (&mut MeasurementSession, SessionContext<'_>) {
        let ctx = SessionContext {
            surface: &mut self.surface,
            events: &mut self.events,
            locator: self.locator.as_ref(),
            catalog: &self.catalog,
            toggles: &self.layers,
        };
        (&mut self.measurement, ctx)
    }

    /// Selektion plus geliehener Kontext.
    pub fn selection_parts(&mut self) -> (&mut SelectionSession, SessionContext<'_>) {
        let ctx = SessionContext {
            surface: &mut self.surface,
            events: &mut self.events,
            locator: self.locator.as_ref(),
            catalog: &self.catalog,
            toggles: &self.layers,
        };
        (&mut self.selection, ctx)
    }
}
