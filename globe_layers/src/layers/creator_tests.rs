/// Tests for the point, line and polygon creators

use super::*;
use crate::collection::{PrimitiveDesc, SceneCollection};
use crate::collection::mock_collection::MockScene;
use crate::graphics::position_from_degrees;

fn route() -> Vec<DVec3> {
    vec![
        position_from_degrees(116.39, 39.90, 0.0),
        position_from_degrees(116.40, 39.91, 0.0),
        position_from_degrees(116.41, 39.92, 0.0),
    ]
}

fn rings() -> Vec<Vec<DVec3>> {
    vec![route(), route()]
}

#[test]
fn test_add_points_as_entities() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let added = layers.add_points(&route(), &OptionSet::default(), false).unwrap();

    assert_eq!(added.entities.len(), 3);
    assert!(added.primitives.is_empty());
    assert_eq!(layers.entities().get(&added.id).unwrap(), added.entities.as_slice());
    assert_eq!(scene.entities.lock().unwrap().len(), 3);
}

#[test]
fn test_add_points_as_primitive() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let added = layers.add_points(&route(), &OptionSet::default(), true).unwrap();

    assert!(added.entities.is_empty());
    assert_eq!(added.primitives.len(), 1);
    let guard = scene.primitives.lock().unwrap();
    assert_eq!(guard.object(added.primitives[0]).unwrap().item.instance_count(), 3);
}

#[test]
fn test_each_call_gets_a_fresh_id() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let first = layers.add_points(&route(), &OptionSet::default(), false).unwrap();
    let second = layers.add_points(&route(), &OptionSet::default(), false).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(layers.entities().len(), 2);
}

#[test]
fn test_add_points_bad_options_registers_nothing() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let options = OptionSet::Shared(PointOptions {
        color: Some("bogus".to_string()),
        ..Default::default()
    });

    assert!(layers.add_points(&route(), &options, false).is_err());
    assert!(layers.ids().is_empty());
}

#[test]
fn test_add_lines_primitive_ground_flag() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let options = OptionSet::Shared(PolylineOptions { on_ground: Some(false), ..Default::default() });
    let added = layers.add_lines(&rings(), &options, true).unwrap();

    let guard = scene.primitives.lock().unwrap();
    let item = &guard.object(added.primitives[0]).unwrap().item;
    assert!(matches!(item, PrimitiveDesc::Polylines { on_ground: false, instances } if instances.len() == 2));
}

#[test]
fn test_add_lines_as_entities() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let added = layers.add_lines(&rings(), &OptionSet::default(), false).unwrap();
    assert_eq!(added.entities.len(), 2);
}

#[test]
fn test_add_polygons_primitive_fill_and_outline() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let added = layers.add_polygons(&rings(), &OptionSet::default(), true).unwrap();

    assert_eq!(added.ground_primitives.len(), 1);
    assert_eq!(added.primitives.len(), 1);
    assert!(layers.ground_primitives().contains(&added.id));
    assert!(layers.primitives().contains(&added.id));
    // the outline primitive is found before the ground fill
    assert_eq!(layers.get(&added.id).unwrap().kind(), crate::layers::LayerKind::Primitive);
}

#[test]
fn test_add_polygons_without_outline() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let options = OptionSet::Shared(PolygonOptions { outline: Some(false), ..Default::default() });
    let added = layers.add_polygons(&rings(), &options, true).unwrap();

    assert_eq!(added.ground_primitives.len(), 1);
    assert!(added.primitives.is_empty());
    assert_eq!(scene.primitives.lock().unwrap().len(), 0);
}

#[test]
fn test_add_polygons_outline_failure_removes_fill() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    scene.primitives.lock().unwrap().fail_after(0);

    assert!(layers.add_polygons(&rings(), &OptionSet::default(), true).is_err());
    assert_eq!(scene.ground_primitives.lock().unwrap().len(), 0);
    assert!(layers.ids().is_empty());
}

#[test]
fn test_add_polygons_as_entities() {
    let scene = MockScene::new();
    let mut layers = scene.layers();
    let added = layers.add_polygons(&rings(), &OptionSet::default(), false).unwrap();
    assert_eq!(added.entities.len(), 2);
    assert!(added.ground_primitives.is_empty());
}
