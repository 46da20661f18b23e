use approx::assert_relative_eq;
use nam_geology_viewer::app::MeasureUnit;
use nam_geology_viewer::core::geodesy::{distance, polygon_area};
use nam_geology_viewer::shared::{CursorStyle, OverlayPrimitive};
use nam_geology_viewer::{
    AppCommand, AppController, AppIntent, AppState, CatalogFeatureLocator, Coordinate, FeatureHit,
    FeatureLocator, InteractionSession, MeasureKind, SelectKind, SelectionGeometry, SessionMode,
    ViewerEvent, ViewerOptions,
};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

const A: Coordinate = Coordinate::new(-22.95, 17.08);
const B: Coordinate = Coordinate::new(-22.90, 17.10);

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

/// Fixture-Locator, der seine Abfragen in einem geteilten Zähler mitzählt.
struct CountingLocator {
    inner: CatalogFeatureLocator,
    calls: Rc<Cell<usize>>,
}

impl FeatureLocator for CountingLocator {
    fn query(&self, geometry: &SelectionGeometry, active_layers: &[String]) -> Vec<FeatureHit> {
        self.calls.set(self.calls.get() + 1);
        self.inner.query(geometry, active_layers)
    }
}

fn fixture_locator() -> CatalogFeatureLocator {
    let mut locator = CatalogFeatureLocator::new(&ViewerOptions::default());
    locator
        .load_layer_file("nam_geology_app:towns_villages", &fixture("towns.geojson"))
        .expect("Orte sollten ladbar sein");
    locator
        .load_layer_file("nam_geology_app:geology_1m", &fixture("geology.geojson"))
        .expect("Geologie sollte ladbar sein");
    locator
}

/// State mit Orten und Geologie aus den Fixtures.
fn state_with_fixtures() -> AppState {
    let mut state = AppState::new();
    state.set_locator(Box::new(fixture_locator()));
    state
}

#[test]
fn test_distance_measurement_flow_emits_start_and_finish() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Distance,
            },
            AppIntent::MapClicked { pos: A },
            AppIntent::MapPointerMoved {
                pos: Coordinate::new(-22.92, 17.2),
            },
            AppIntent::MapClicked { pos: B },
            AppIntent::MapDoubleClicked { pos: B },
        ],
    );

    let events = state.drain_events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        ViewerEvent::MeasureStart {
            kind: MeasureKind::Distance
        }
    );
    let result = match &events[1] {
        ViewerEvent::MeasureFinish(result) => result,
        other => panic!("Unerwartetes Ereignis: {other:?}"),
    };
    assert_eq!(result.points, vec![A, B]);
    assert_relative_eq!(result.total, distance(A, B) / 1_000.0, epsilon = 1e-9);
    assert_relative_eq!(result.total, 5.925, epsilon = 0.01);
    assert_eq!(result.last_segment, Some(result.total));
    assert_eq!(result.unit, MeasureUnit::Kilometers);

    assert_eq!(state.measurement.mode(), SessionMode::Completed);
    assert_eq!(state.surface.subscription_count(), 0);
    assert_eq!(state.surface.cursor(), CursorStyle::Default);
}

#[test]
fn test_measure_finish_serializes_as_notification() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Distance,
            },
            AppIntent::MapClicked { pos: A },
            AppIntent::MapClicked { pos: B },
            AppIntent::MapDoubleClicked { pos: B },
        ],
    );

    let events = state.drain_events();
    let json = serde_json::to_value(&events[1]).expect("Ereignis sollte serialisierbar sein");

    assert_eq!(json["event"], "measure-finish");
    assert_eq!(json["kind"], "distance");
    assert_eq!(json["unit"], "kilometers");
    assert!(json["last"].is_number());
    assert!(json.get("perimeter").is_none());
    assert_eq!(json["points"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_area_measurement_flow_reports_hectares_and_perimeter() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let triangle = [
        Coordinate::new(-23.0, 17.0),
        Coordinate::new(-23.0, 17.1),
        Coordinate::new(-22.9, 17.05),
    ];

    let mut intents = vec![AppIntent::StartMeasurementRequested {
        kind: MeasureKind::Area,
    }];
    intents.extend(triangle.iter().map(|&pos| AppIntent::MapClicked { pos }));
    intents.push(AppIntent::MapDoubleClicked { pos: triangle[2] });
    run(&mut controller, &mut state, intents);

    let result = state
        .measurement
        .result()
        .expect("Messung sollte abgeschlossen sein");
    assert!(result.total > 0.0);
    assert_relative_eq!(result.total, polygon_area(&triangle) / 10_000.0, epsilon = 1e-9);
    let perimeter = (distance(triangle[0], triangle[1])
        + distance(triangle[1], triangle[2])
        + distance(triangle[2], triangle[0]))
        / 1_000.0;
    assert_relative_eq!(
        result.perimeter.expect("Umfang erwartet"),
        perimeter,
        epsilon = 1e-9
    );
    assert_eq!(result.unit, MeasureUnit::Hectares);

    let labels: Vec<_> = state
        .surface
        .primitives()
        .filter_map(|(_, entry)| match &entry.primitive {
            OverlayPrimitive::Label {
                text,
                permanent: true,
                ..
            } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 1);
    assert!(labels[0].starts_with("Area: "));
}

#[test]
fn test_restart_discards_points_and_does_not_duplicate_input() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Distance,
            },
            AppIntent::MapClicked { pos: A },
            AppIntent::MapClicked { pos: B },
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Distance,
            },
        ],
    );
    assert!(state.measurement.points().is_empty());

    run(&mut controller, &mut state, vec![AppIntent::MapClicked { pos: A }]);
    assert_eq!(state.measurement.points(), &[A]);
}

#[test]
fn test_clear_measurements_returns_to_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Area,
            },
            AppIntent::MapClicked { pos: A },
            AppIntent::MapClicked { pos: B },
            AppIntent::ClearMeasurementsRequested,
        ],
    );

    assert_eq!(state.measurement.mode(), SessionMode::Idle);
    assert!(state.measurement.points().is_empty());
    assert!(state.surface.is_empty());
    assert_eq!(state.surface.subscription_count(), 0);
    assert_eq!(state.drain_events().last(), Some(&ViewerEvent::MeasureClear));

    // weitere Klicks erreichen keine Session mehr
    run(&mut controller, &mut state, vec![AppIntent::MapClicked { pos: A }]);
    assert!(state.measurement.points().is_empty());
}

#[test]
fn test_polygon_selection_reports_features_of_active_layers() {
    let mut controller = AppController::new();
    let mut state = state_with_fixtures();
    let ring = [
        Coordinate::new(-23.0, 16.9),
        Coordinate::new(-23.0, 17.3),
        Coordinate::new(-22.3, 17.1),
    ];

    let mut intents = vec![
        AppIntent::GeologyLayerSelected {
            id: "major-geological-units".into(),
        },
        AppIntent::OrientationLayerToggled {
            id: "towns-villages".into(),
            enabled: true,
        },
        AppIntent::StartSelectionRequested {
            kind: SelectKind::Polygon,
        },
    ];
    intents.extend(ring.iter().map(|&pos| AppIntent::MapClicked { pos }));
    intents.push(AppIntent::MapDoubleClicked { pos: ring[2] });
    run(&mut controller, &mut state, intents);

    let events = state.drain_events();
    let result = match events.last() {
        Some(ViewerEvent::SelectFinish(result)) => result,
        other => panic!("Unerwartetes Ereignis: {other:?}"),
    };
    assert_eq!(result.kind, SelectKind::Polygon);
    assert_eq!(
        result.geometry,
        SelectionGeometry::Ring {
            points: ring.to_vec()
        }
    );

    let hits: Vec<_> = result
        .features
        .iter()
        .map(|f| (f.layer.as_str(), f.name.as_str(), f.detail.as_str()))
        .collect();
    assert_eq!(
        hits,
        vec![
            ("nam_geology_app:geology_1m", "Damara Sequence", "Schist"),
            ("nam_geology_app:towns_villages", "Windhoek", "Capital"),
            ("nam_geology_app:towns_villages", "Rehoboth Road Camp", "Village"),
        ]
    );
}

#[test]
fn test_point_selection_completes_with_exactly_one_query() {
    let mut controller = AppController::new();
    let calls = Rc::new(Cell::new(0));
    let mut state = AppState::new();
    state.set_locator(Box::new(CountingLocator {
        inner: fixture_locator(),
        calls: Rc::clone(&calls),
    }));
    let windhoek = Coordinate::new(-22.5609, 17.0836);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::OrientationLayerToggled {
                id: "towns-villages".into(),
                enabled: true,
            },
            AppIntent::StartSelectionRequested {
                kind: SelectKind::Point,
            },
            AppIntent::MapClicked { pos: windhoek },
            AppIntent::MapClicked { pos: windhoek },
        ],
    );

    let finishes: Vec<_> = state
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            ViewerEvent::SelectFinish(result) => Some(result),
            _ => None,
        })
        .collect();
    assert_eq!(finishes.len(), 1);
    assert_eq!(
        finishes[0].geometry,
        SelectionGeometry::Point { point: windhoek }
    );
    let names: Vec<_> = finishes[0].features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Windhoek"]);
    assert_eq!(state.selection.mode(), SessionMode::Completed);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_finished_measurement_keeps_crosshair_for_running_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::StartSelectionRequested {
                kind: SelectKind::Polygon,
            },
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Distance,
            },
            AppIntent::MapClicked { pos: A },
            AppIntent::MapClicked { pos: B },
            AppIntent::MapDoubleClicked { pos: B },
        ],
    );

    assert_eq!(state.measurement.mode(), SessionMode::Completed);
    assert_eq!(state.selection.mode(), SessionMode::Active);
    assert_eq!(state.selection.points(), &[A, B]);
    assert_eq!(state.surface.cursor(), CursorStyle::Crosshair);

    run(&mut controller, &mut state, vec![AppIntent::StopSelectionRequested]);
    assert_eq!(state.surface.cursor(), CursorStyle::Default);
}

#[test]
fn test_unknown_layer_toggle_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::GeologyLayerSelected {
                id: "towns-villages".into(),
            },
            AppIntent::OrientationLayerToggled {
                id: "does-not-exist".into(),
                enabled: true,
            },
        ],
    );

    assert!(state.layers.geology.is_none());
    assert!(state.layers.orientation.is_empty());
    assert_eq!(state.command_log.len(), 2);
}

#[test]
fn test_zoom_to_extent_fits_home_extent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(&mut controller, &mut state, vec![AppIntent::ZoomToExtentRequested]);

    assert_eq!(state.surface.view_bounds(), Some(state.options.home_extent));
    match state.command_log.entries().last() {
        Some(AppCommand::FitToBounds { .. }) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_applied_options_recolor_next_measurement() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = ViewerOptions {
        completed_color: [1.0, 0.0, 0.0, 1.0],
        ..ViewerOptions::default()
    };

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::OptionsApplied {
                options: Box::new(options),
            },
            AppIntent::StartMeasurementRequested {
                kind: MeasureKind::Distance,
            },
            AppIntent::MapClicked { pos: A },
            AppIntent::MapClicked { pos: B },
            AppIntent::MapDoubleClicked { pos: B },
        ],
    );

    let line_color = state.surface.primitives().find_map(|(_, entry)| match &entry.primitive {
        OverlayPrimitive::Line { style, .. } => Some(style.color),
        _ => None,
    });
    assert_eq!(line_color, Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(state.options.completed_color, [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_intent_script_from_json_replays() {
    let script = r#"[
        {"intent": "start_measurement_requested", "kind": "distance"},
        {"intent": "map_clicked", "pos": {"lat": -22.95, "lng": 17.08}},
        {"intent": "map_clicked", "pos": {"lat": -22.90, "lng": 17.10}},
        {"intent": "map_double_clicked", "pos": {"lat": -22.90, "lng": 17.10}},
        {"intent": "clear_measurements_requested"}
    ]"#;
    let intents: Vec<AppIntent> = serde_json::from_str(script).expect("Skript sollte gültig sein");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(&mut controller, &mut state, intents);

    let names: Vec<_> = state
        .drain_events()
        .iter()
        .map(|event| {
            serde_json::to_value(event).expect("Ereignis sollte serialisierbar sein")["event"]
                .as_str()
                .map(str::to_owned)
        })
        .collect();
    assert_eq!(
        names,
        vec![
            Some("measure-start".to_owned()),
            Some("measure-finish".to_owned()),
            Some("measure-clear".to_owned()),
        ]
    );
}
