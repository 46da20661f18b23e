//! Application-Layer: Controller, State, Events, Sessions und Kollaborateure.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod locator;
/// Application State
///
/// Besitzt beide Sessions, Oberfläche, Layer-Schalter und Ereignis-Ausgang.
pub mod state;
pub mod surface;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, ViewerEvent};
pub use locator::{CatalogFeatureLocator, FeatureLocator};
pub use state::AppState;
pub use surface::{MapSurface, OverlayEntry, OverlaySurface};
pub use tools::{
    InteractionSession, MeasureKind, MeasureUnit, MeasurementResult, MeasurementSession,
    SelectKind, SelectionResult, SelectionSession, SessionAction, SessionContext, SessionMode,
};
