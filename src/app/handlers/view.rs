//! Handler für Kartenausschnitt und Optionen.

use crate::app::surface::MapSurface;
use crate::app::AppState;
use crate::core::LatLngBounds;
use crate::shared::ViewerOptions;

/// Setzt den Kartenausschnitt.
pub fn fit_to_bounds(state: &mut AppState, bounds: LatLngBounds) {
    state.surface.fit_bounds(bounds);
}

/// Übernimmt neue Optionen und konfiguriert Sessions und Katalog neu.
///
/// Layer-Schalter, deren ID der neue Katalog nicht mehr kennt, fallen weg.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) {
    state.measurement.apply_options(&options);
    state.selection.apply_options(&options);
    state.locator.apply_options(&options);
    state.catalog = options.layer_catalog();

    let catalog = &state.catalog;
    if let Some(id) = state.layers.geology.clone() {
        if catalog.get(&id).is_none() {
            state.layers.clear_geology();
        }
    }
    state.layers.orientation.retain(|id| catalog.get(id).is_some());

    state.options = options;
    log::info!("Optionen übernommen");
}
