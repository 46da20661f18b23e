use crate::app::tools::{MeasureKind, SelectKind};
use crate::core::{Coordinate, LatLngBounds};
use crate::shared::ViewerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Messung ===
    /// Messung starten (verwirft eine laufende)
    StartMeasurement { kind: MeasureKind },
    /// Klick an die Messung weiterreichen
    MeasureClick { pos: Coordinate },
    /// Mausbewegung an die Messung weiterreichen
    MeasurePointerMove { pos: Coordinate },
    /// Doppelklick an die Messung weiterreichen
    MeasureDoubleClick { pos: Coordinate },
    /// Messung beenden (Abos lösen, Live-Label entfernen)
    StopMeasurement,
    /// Messung inkl. Geometrie löschen
    ClearMeasurements,

    // === Selektion ===
    /// Selektion starten (verwirft eine laufende)
    StartSelection { kind: SelectKind },
    /// Klick an die Selektion weiterreichen
    SelectClick { pos: Coordinate },
    /// Mausbewegung an die Selektion weiterreichen
    SelectPointerMove { pos: Coordinate },
    /// Doppelklick an die Selektion weiterreichen
    SelectDoubleClick { pos: Coordinate },
    /// Selektion beenden
    StopSelection,
    /// Selektion inkl. Geometrie und Treffern löschen
    ClearSelection,

    // === Layer ===
    /// Geologie-Layer wählen (exklusiv)
    SelectGeologyLayer { id: String },
    /// Orientierungs-Layer ein-/ausschalten
    SetOrientationLayer { id: String, enabled: bool },

    // === Ansicht & Optionen ===
    /// Kartenausschnitt setzen
    FitToBounds { bounds: LatLngBounds },
    /// Optionen übernehmen
    ApplyOptions { options: Box<ViewerOptions> },
}
