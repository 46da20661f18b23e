use super::super::test_support::SessionHarness;
use super::super::{InteractionSession, SessionAction, SessionMode};
use super::{SelectKind, SelectionSession};
use crate::app::events::ViewerEvent;
use crate::app::surface::MapSurface;
use crate::core::{CatalogFeature, Coordinate, FeatureGeometry, SelectionGeometry};
use crate::shared::{CursorStyle, InputKind, OverlayPrimitive, SessionOwner};

const WINDHOEK: Coordinate = Coordinate::new(-22.56, 17.08);

fn ring() -> [Coordinate; 3] {
    [
        Coordinate::new(-23.0, 16.9),
        Coordinate::new(-23.0, 17.3),
        Coordinate::new(-22.3, 17.1),
    ]
}

/// Gerüst mit Orten und einem Geologie-Polygon, beide Layer aktiv.
fn harness_with_features() -> SessionHarness {
    let mut harness = SessionHarness::new();
    harness.locator.insert_layer(
        "nam_geology_app:towns_villages",
        vec![
            CatalogFeature::new("Windhoek", "Capital", FeatureGeometry::Point(WINDHOEK))
                .expect("Feature sollte gültig sein"),
            CatalogFeature::new(
                "Swakopmund",
                "Town",
                FeatureGeometry::Point(Coordinate::new(-22.68, 14.53)),
            )
            .expect("Feature sollte gültig sein"),
        ],
    );
    harness.locator.insert_layer(
        "nam_geology_app:geology_1m",
        vec![CatalogFeature::new(
            "Damara Sequence",
            "Schist",
            FeatureGeometry::Polygon {
                exterior: vec![
                    Coordinate::new(-23.5, 16.5),
                    Coordinate::new(-23.5, 17.5),
                    Coordinate::new(-22.0, 17.5),
                    Coordinate::new(-22.0, 16.5),
                ],
                holes: Vec::new(),
            },
        )
        .expect("Feature sollte gültig sein")],
    );
    harness.toggles.select_geology("major-geological-units");
    harness.toggles.set_orientation("towns-villages", true);
    harness
}

#[test]
fn test_point_selection_completes_on_single_click() {
    let mut harness = harness_with_features();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Point, &mut harness.ctx());

    assert!(harness.surface.is_subscribed(SessionOwner::Selection, InputKind::Click));
    assert!(!harness.surface.is_subscribed(SessionOwner::Selection, InputKind::DoubleClick));

    let action = session.on_click(WINDHOEK, &mut harness.ctx());

    assert_eq!(action, SessionAction::Completed);
    assert_eq!(session.mode(), SessionMode::Completed);
    assert_eq!(session.points(), &[WINDHOEK]);
    assert_eq!(harness.surface.subscription_count(), 0);
    assert_eq!(harness.surface.cursor(), CursorStyle::Default);
    assert!(harness.surface.primitives().any(|(_, entry)| matches!(
        entry.primitive,
        OverlayPrimitive::Marker { at, .. } if at == WINDHOEK
    )));

    let result = session.result().expect("Ergebnis sollte vorhanden sein");
    assert_eq!(result.kind, SelectKind::Point);
    assert_eq!(result.geometry, SelectionGeometry::Point { point: WINDHOEK });
    let names: Vec<_> = result.features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Damara Sequence", "Windhoek"]);

    // genau eine Abfrage, genau ein Abschluss
    let finishes = harness
        .events
        .iter()
        .filter(|e| matches!(e, ViewerEvent::SelectFinish(_)))
        .count();
    assert_eq!(finishes, 1);
    assert_eq!(harness.locator.calls(), 1);
}

#[test]
fn test_point_selection_queries_locator_exactly_once() {
    let mut harness = harness_with_features();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Point, &mut harness.ctx());
    assert_eq!(harness.locator.calls(), 0);

    session.on_click(WINDHOEK, &mut harness.ctx());
    let second = session.on_click(Coordinate::new(-22.68, 14.53), &mut harness.ctx());

    assert_eq!(second, SessionAction::Ignored);
    assert_eq!(harness.locator.calls(), 1);
    assert_eq!(session.points(), &[WINDHOEK]);
}

#[test]
fn test_polygon_selection_queries_only_on_completion() {
    let mut harness = harness_with_features();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Polygon, &mut harness.ctx());

    let [a, b, c] = ring();
    session.on_click(a, &mut harness.ctx());
    session.on_click(b, &mut harness.ctx());
    session.on_double_click(b, &mut harness.ctx());
    session.on_click(c, &mut harness.ctx());
    assert_eq!(harness.locator.calls(), 0);

    session.on_double_click(c, &mut harness.ctx());
    session.on_double_click(c, &mut harness.ctx());

    assert_eq!(harness.locator.calls(), 1);
}

#[test]
fn test_polygon_selection_queries_active_layers() {
    let mut harness = harness_with_features();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Polygon, &mut harness.ctx());

    for p in ring() {
        assert_eq!(session.on_click(p, &mut harness.ctx()), SessionAction::Continue);
    }
    let action = session.on_double_click(ring()[2], &mut harness.ctx());

    assert_eq!(action, SessionAction::Completed);
    assert_eq!(session.final_geometry(), Some(&ring()[..]));
    let result = session.result().expect("Ergebnis sollte vorhanden sein");
    assert_eq!(
        result.geometry,
        SelectionGeometry::Ring {
            points: ring().to_vec()
        }
    );
    let hits: Vec<_> = result
        .features
        .iter()
        .map(|f| (f.layer.as_str(), f.name.as_str()))
        .collect();
    assert_eq!(
        hits,
        vec![
            ("nam_geology_app:geology_1m", "Damara Sequence"),
            ("nam_geology_app:towns_villages", "Windhoek"),
        ]
    );
    assert_eq!(session.selected_features().len(), 2);
}

#[test]
fn test_layer_toggles_are_read_at_completion() {
    let mut harness = harness_with_features();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Polygon, &mut harness.ctx());
    for p in ring() {
        session.on_click(p, &mut harness.ctx());
    }

    harness.toggles.clear_geology();
    session.on_double_click(ring()[2], &mut harness.ctx());

    let names: Vec<_> = session
        .selected_features()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Windhoek"]);
}

#[test]
fn test_polygon_needs_three_points() {
    let mut harness = SessionHarness::new();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Polygon, &mut harness.ctx());
    let [p1, p2, _] = ring();
    session.on_click(p1, &mut harness.ctx());
    session.on_click(p2, &mut harness.ctx());

    assert_eq!(session.on_double_click(p2, &mut harness.ctx()), SessionAction::Ignored);
    assert_eq!(session.mode(), SessionMode::Active);
    assert!(session.result().is_none());
}

#[test]
fn test_polygon_outline_switches_from_line_to_polygon() {
    let mut harness = SessionHarness::new();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Polygon, &mut harness.ctx());
    let [p1, p2, p3] = ring();

    session.on_click(p1, &mut harness.ctx());
    assert_eq!(
        harness.live_label_text().as_deref(),
        Some("Click to continue selecting")
    );
    session.on_click(p2, &mut harness.ctx());
    assert!(session.graphics.line().is_some());
    assert!(session.graphics.polygon().is_none());
    assert_eq!(
        harness.live_label_text().as_deref(),
        Some("Points: 2\nDouble-click to complete selection")
    );

    session.on_click(p3, &mut harness.ctx());
    assert!(session.graphics.line().is_none());
    let polygon = session.graphics.polygon().expect("Polygon sollte existieren");

    let pointer = Coordinate::new(-22.9, 16.8);
    session.on_pointer_move(pointer, &mut harness.ctx());
    assert_eq!(session.points().len(), 3);
    match harness.surface.get(polygon) {
        Some(OverlayPrimitive::Polygon { ring, .. }) => {
            assert_eq!(ring, &vec![p1, p2, p3, pointer])
        }
        other => panic!("Unerwartetes Primitiv: {other:?}"),
    }
}

#[test]
fn test_completed_polygon_is_recolored() {
    let mut harness = SessionHarness::new();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Polygon, &mut harness.ctx());
    for p in ring() {
        session.on_click(p, &mut harness.ctx());
    }
    session.on_pointer_move(Coordinate::new(-22.0, 18.0), &mut harness.ctx());
    session.on_double_click(ring()[2], &mut harness.ctx());

    let polygon = session.graphics.polygon().expect("Polygon sollte existieren");
    match harness.surface.get(polygon) {
        Some(OverlayPrimitive::Polygon { ring: drawn, style }) => {
            assert_eq!(drawn, &ring().to_vec());
            assert!(!style.dashed);
        }
        other => panic!("Unerwartetes Primitiv: {other:?}"),
    }
    assert!(harness.live_label_text().is_none());
}

#[test]
fn test_point_selection_ignores_move_and_double_click() {
    let mut harness = SessionHarness::new();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Point, &mut harness.ctx());

    assert_eq!(session.on_pointer_move(WINDHOEK, &mut harness.ctx()), SessionAction::Ignored);
    assert_eq!(session.on_double_click(WINDHOEK, &mut harness.ctx()), SessionAction::Ignored);
    assert_eq!(session.mode(), SessionMode::Active);
}

#[test]
fn test_clear_resets_selection() {
    let mut harness = harness_with_features();
    let mut session = SelectionSession::default();
    session.start(SelectKind::Point, &mut harness.ctx());
    session.on_click(WINDHOEK, &mut harness.ctx());

    session.clear(&mut harness.ctx());

    assert_eq!(session.mode(), SessionMode::Idle);
    assert!(session.points().is_empty());
    assert!(session.selected_features().is_empty());
    assert!(harness.surface.is_empty());
    assert_eq!(harness.events.last(), Some(&ViewerEvent::SelectClear));
}
