//! Handler für die Layer-Schalter.

use crate::app::AppState;
use crate::core::LayerCategory;

/// Wählt einen Geologie-Layer; unbekannte IDs werden ignoriert.
pub fn select_geology(state: &mut AppState, id: String) {
    if !state.catalog.is_in_category(&id, LayerCategory::Geology) {
        log::warn!("Unbekannter Geologie-Layer ignoriert: {}", id);
        return;
    }
    log::info!("Geologie-Layer gewählt: {}", id);
    state.layers.select_geology(id);
}

/// Schaltet einen Orientierungs-Layer; unbekannte IDs werden ignoriert.
pub fn set_orientation(state: &mut AppState, id: String, enabled: bool) {
    if !state.catalog.is_in_category(&id, LayerCategory::Orientation) {
        log::warn!("Unbekannter Orientierungs-Layer ignoriert: {}", id);
        return;
    }
    log::info!(
        "Orientierungs-Layer {}: {}",
        id,
        if enabled { "an" } else { "aus" }
    );
    state.layers.set_orientation(id, enabled);
}
