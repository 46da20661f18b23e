//! Trait-basiertes Session-System für Messung und räumliche Selektion.
//!
//! Beide Controller implementieren `InteractionSession` und arbeiten nur
//! über den `SessionContext`: Kartenoberfläche, Ereignis-Ausgang und die
//! Abfrage-Kollaborateure werden vom `AppState` geliehen, nie global gesucht.

/// Gemeinsame Hilfen für Overlay-Handles, Abos und Rubber-Band-Geometrie.
pub mod common;
/// Strecken- und Flächenmessung.
pub mod measure;
/// Polygon- und Punkt-Selektion mit Feature-Abfrage.
pub mod select;
/// InteractionSession-Trait als Schnittstelle beider Controller.
mod session;
#[cfg(test)]
pub(crate) mod test_support;

pub use measure::{MeasureKind, MeasureUnit, MeasurementResult, MeasurementSession};
pub use select::{SelectKind, SelectionResult, SelectionSession};
pub use session::InteractionSession;

use crate::app::events::ViewerEvent;
use crate::app::locator::FeatureLocator;
use crate::app::surface::MapSurface;
use crate::core::{LayerCatalog, LayerToggleState};

/// Lebenszyklus-Zustand einer Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Keine Eingabe erwartet, keine Punkte
    #[default]
    Idle,
    /// Sammelt Punkte
    Active,
    /// Abgeschlossen, Punkte eingefroren
    Completed,
}

/// Rückgabe der Eingabe-Handler, steuert den Session-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Eingabe passt nicht zum Zustand, nichts geändert
    Ignored,
    /// Eingabe verarbeitet, weitere Eingabe nötig
    Continue,
    /// Session abgeschlossen, Ergebnis wurde gemeldet
    Completed,
}

/// Geliehener Kontext für einen Session-Aufruf.
pub struct SessionContext<'a> {
    /// Overlay-Ebene und Eingabe-Abos
    pub surface: &'a mut dyn MapSurface,
    /// Ausgang für Benachrichtigungen
    pub events: &'a mut Vec<ViewerEvent>,
    /// Feature-Abfrage (nur Selektion)
    pub locator: &'a dyn FeatureLocator,
    /// Layer-Katalog für die Auflösung aktiver Layer
    pub catalog: &'a LayerCatalog,
    /// Aktueller Layer-Schalterzustand
    pub toggles: &'a LayerToggleState,
}

impl SessionContext<'_> {
    /// Benachrichtigung in den Ausgang schreiben.
    pub fn emit(&mut self, event: ViewerEvent) {
        self.events.push(event);
    }
}
