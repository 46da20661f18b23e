//! Gemeinsame Hilfsfunktionen für Sessions.
//!
//! Aufgeteilt in:
//! - `graphics`: SessionGraphics (Overlay-Handles einer Session)
//! - `input`: Abo-Verwaltung und Rubber-Band-Geometrie

mod graphics;
mod input;

pub(crate) use graphics::SessionGraphics;
pub(crate) use input::{release_inputs, rubber_band, subscribe_inputs};
