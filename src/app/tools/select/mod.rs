//! Räumliche Selektion: Polygon per Klicks oder einzelner Punkt; bei Abschluss
//! werden die Features der aktiven Layer abgefragt.

mod lifecycle;
mod state;

pub use state::{SelectKind, SelectionResult, SelectionSession};

#[cfg(test)]
mod tests;
