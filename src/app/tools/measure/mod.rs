//! Messung: Linienzug (Distanz) oder geschlossener Ring (Fläche) per Klick,
//! Abschluss per Doppelklick.

mod geometry;
mod lifecycle;
mod state;

pub use state::{MeasureKind, MeasureUnit, MeasurementResult, MeasurementSession};
