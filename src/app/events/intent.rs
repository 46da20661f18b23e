use crate::app::tools::{MeasureKind, SelectKind};
use crate::core::Coordinate;
use crate::shared::ViewerOptions;
use serde::{Deserialize, Serialize};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/Karte ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum AppIntent {
    /// Messung starten (Button "Distanz" / "Fläche")
    StartMeasurementRequested { kind: MeasureKind },
    /// Laufende Messung beenden, Gezeichnetes bleibt stehen
    StopMeasurementRequested,
    /// Messungen löschen
    ClearMeasurementsRequested,
    /// Selektion starten (Button "Polygon" / "Punkt")
    StartSelectionRequested { kind: SelectKind },
    /// Laufende Selektion beenden, Gezeichnetes bleibt stehen
    StopSelectionRequested,
    /// Selektion löschen
    ClearSelectionRequested,

    /// Klick auf die Karte
    MapClicked { pos: Coordinate },
    /// Mausbewegung über der Karte
    MapPointerMoved { pos: Coordinate },
    /// Doppelklick auf die Karte
    MapDoubleClicked { pos: Coordinate },

    /// Geologie-Layer im Radio-Block gewählt
    GeologyLayerSelected { id: String },
    /// Orientierungs-Layer per Checkbox umgeschaltet
    OrientationLayerToggled { id: String, enabled: bool },

    /// Karte auf Gesamtausdehnung zoomen
    ZoomToExtentRequested,
    /// Neue Optionen übernehmen
    OptionsApplied { options: Box<ViewerOptions> },
}
