use crate::app::tools::{MeasureKind, MeasurementResult, SelectKind, SelectionResult};
use serde::Serialize;

/// Benachrichtigungen an Panels/UI (Ausgang des App-Layers).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ViewerEvent {
    /// Messung gestartet
    MeasureStart { kind: MeasureKind },
    /// Messung abgeschlossen
    MeasureFinish(MeasurementResult),
    /// Messungen gelöscht
    MeasureClear,
    /// Selektion gestartet
    SelectStart { kind: SelectKind },
    /// Selektion abgeschlossen, inkl. Treffer
    SelectFinish(SelectionResult),
    /// Selektion gelöscht
    SelectClear,
}
