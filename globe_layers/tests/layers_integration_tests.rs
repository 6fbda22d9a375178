//! Integration tests for the Layers facade over the in-memory host
//!
//! These tests verify registry bookkeeping against real collections:
//! insertion order, replacement, rollback and fan-out lookups.
//!
//! Run with: cargo test --test layers_integration_tests

use std::sync::Arc;
use futures::executor::block_on;
use globe_layers::glam::DVec3;
use globe_layers::globe::{Error, Layers, SceneHost};
use globe_layers::globe::collection::{EntityDesc, PrimitiveDesc, SceneCollection};
use globe_layers::globe::graphics::{
    position_from_degrees, OptionSet, PointOptions, PolygonOptions, PolylineOptions,
};
use globe_layers::globe::layers::{
    GeoJsonLoadOptions, ImageryLayerOptions, ImageryProviderDesc, LayerKind, LayerObject,
};
use globe_layers_memory::{MemoryLoader, MemoryScene};

fn setup() -> (MemoryScene, Layers) {
    let scene = MemoryScene::new();
    let loader = MemoryLoader::new().with_document(
        "zones.geojson",
        r#"{ "type": "FeatureCollection", "features": [] }"#,
    );
    let layers = Layers::new(scene.layer_collections(), Arc::new(loader));
    (scene, layers)
}

fn osm(url: &str) -> ImageryProviderDesc {
    ImageryProviderDesc::OpenStreetMap { url: url.to_string() }
}

// ============================================================================
// FAN-OUT TESTS
// ============================================================================

#[test]
fn test_integration_same_name_resolves_by_priority() {
    let (scene, mut layers) = setup();
    let entities = layers.entities_mut().add("x", vec![EntityDesc::new("x-1")]).unwrap();
    layers.primitives_mut().add("x", PrimitiveDesc::Points(Vec::new())).unwrap();

    assert_eq!(layers.get("x"), Some(LayerObject::Entities(&entities)));
    assert_eq!(layers.ids().iter().filter(|id| *id == "x").count(), 2);

    // first remove hits the entities, second the primitive
    assert!(layers.remove("x"));
    assert_eq!(layers.get("x").map(|o| o.kind()), Some(LayerKind::Primitive));
    assert!(scene.memory_entities().is_empty());
    assert!(layers.remove("x"));
    assert!(!layers.remove("x"));
    assert!(scene.memory_primitives().is_empty());
}

#[test]
fn test_integration_clear_empties_every_collection() {
    let (scene, mut layers) = setup();
    layers.entities_mut().add_one("e", EntityDesc::new("e")).unwrap();
    layers.ground_primitives_mut().add("g", PrimitiveDesc::Points(Vec::new())).unwrap();
    block_on(layers.data_sources_mut().add_geojson("zones", "zones.geojson", GeoJsonLoadOptions::default())).unwrap();
    layers.imagery_layers_mut().add("osm", osm("https://tile.example"), ImageryLayerOptions::default()).unwrap();

    layers.clear();

    assert!(layers.ids().is_empty());
    assert!(scene.memory_entities().is_empty());
    assert!(scene.memory_ground_primitives().is_empty());
    assert!(scene.memory_data_sources().is_empty());
    assert!(scene.memory_imagery_layers().is_empty());
}

// ============================================================================
// REGISTRY AGAINST THE HOST
// ============================================================================

#[test]
fn test_integration_replace_frees_object_ids() {
    let (scene, mut layers) = setup();
    layers.entities_mut().add("site", vec![EntityDesc::new("site-marker")]).unwrap();

    // same object id is accepted because the old batch is removed first
    let handles = layers.entities_mut().add("site", vec![EntityDesc::new("site-marker")]).unwrap();

    let entities = scene.memory_entities();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities.find("site-marker"), Some(handles[0]));
}

#[test]
fn test_integration_duplicate_object_id_rolls_back_batch() {
    let (scene, mut layers) = setup();
    layers.entities_mut().add_one("first", EntityDesc::new("dup")).unwrap();

    let result = layers
        .entities_mut()
        .add("second", vec![EntityDesc::new("fresh"), EntityDesc::new("dup")]);

    assert!(matches!(result, Err(Error::BackendError(_))));
    assert!(!layers.entities().contains("second"));
    let entities = scene.memory_entities();
    assert_eq!(entities.len(), 1);
    assert!(entities.find("fresh").is_none());
}

#[test]
fn test_integration_batch_add_raises_one_change_event() {
    let (scene, mut layers) = setup();
    let batch = (0..5).map(|i| EntityDesc::new(format!("p{}", i))).collect();
    layers.entities_mut().add("batch", batch).unwrap();

    let entities = scene.memory_entities();
    assert_eq!(entities.len(), 5);
    assert_eq!(entities.change_events(), 1);
    assert!(!entities.is_suspended());
}

#[test]
fn test_integration_externally_removed_entity() {
    let (scene, mut layers) = setup();
    let handles = layers.entities_mut().add("gone", vec![EntityDesc::new("g")]).unwrap();
    scene.memory_entities().remove(handles[0]);

    // the name is still registered and removing it succeeds quietly
    assert!(layers.entities().contains("gone"));
    assert!(layers.remove("gone"));
    assert!(!layers.entities().contains("gone"));
}

// ============================================================================
// CREATOR TESTS
// ============================================================================

#[test]
fn test_integration_route_markers() {
    let (scene, mut layers) = setup();
    let positions = vec![
        position_from_degrees(2.35, 48.85, 0.0),
        position_from_degrees(4.83, 45.76, 0.0),
        position_from_degrees(5.37, 43.30, 0.0),
    ];
    let options = OptionSet::Shared(PointOptions {
        color: Some("#ffaa00".to_string()),
        ids: vec!["paris".to_string(), "lyon".to_string(), "marseille".to_string()],
        ..Default::default()
    });

    let added = layers.add_points(&positions, &options, false).unwrap();
    assert_eq!(added.entities.len(), 3);
    {
        let entities = scene.memory_entities();
        let ids: Vec<_> = entities.items().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["paris", "lyon", "marseille"]);
    }

    assert!(layers.show(&added.id, false));
    {
        let entities = scene.memory_entities();
        assert!(added.entities.iter().all(|h| entities.is_shown(*h) == Some(false)));
    }

    assert!(layers.remove(&added.id));
    assert!(scene.memory_entities().is_empty());
}

#[test]
fn test_integration_lines_as_primitive() {
    let (scene, mut layers) = setup();
    let lines = vec![vec![DVec3::X, DVec3::Y], vec![DVec3::Y, DVec3::Z]];

    let added = layers.add_lines(&lines, &OptionSet::Shared(PolylineOptions::default()), true).unwrap();

    assert_eq!(added.primitives.len(), 1);
    assert!(added.entities.is_empty());
    let primitives = scene.memory_primitives();
    match &primitives.get(added.primitives[0]).unwrap().item {
        PrimitiveDesc::Polylines { instances, on_ground } => {
            assert_eq!(instances.len(), 2);
            assert!(*on_ground);
        }
        other => panic!("expected polylines, got {:?}", other),
    }
}

#[test]
fn test_integration_polygons_as_primitives_split_fill_and_outline() {
    let (scene, mut layers) = setup();
    let rings = vec![vec![DVec3::X, DVec3::Y, DVec3::Z]];

    // `outline` left unset still draws the outline
    let added = layers.add_polygons(&rings, &OptionSet::Shared(PolygonOptions::default()), true).unwrap();

    assert_eq!(added.ground_primitives.len(), 1);
    assert_eq!(added.primitives.len(), 1);
    assert_eq!(scene.memory_ground_primitives().len(), 1);
    assert_eq!(scene.memory_primitives().len(), 1);

    // outline first, then the fill under the same name
    assert_eq!(layers.get(&added.id).map(|o| o.kind()), Some(LayerKind::Primitive));
    assert!(layers.remove(&added.id));
    assert_eq!(layers.get(&added.id).map(|o| o.kind()), Some(LayerKind::GroundPrimitive));
}

#[test]
fn test_integration_polygon_entities_without_outline() {
    let (scene, mut layers) = setup();
    let rings = vec![vec![DVec3::X, DVec3::Y, DVec3::Z]];
    let options = OptionSet::Shared(PolygonOptions { outline: Some(false), ..Default::default() });

    let added = layers.add_polygons(&rings, &options, false).unwrap();

    let entities = scene.memory_entities();
    let entity = &entities.get(added.entities[0]).unwrap().item;
    assert!(entity.polygon.is_some());
    assert!(!entity.polyline.as_ref().unwrap().show);
}

#[test]
fn test_integration_invalid_color_creates_nothing() {
    let (scene, mut layers) = setup();
    let options = OptionSet::Shared(PointOptions {
        color: Some("not-a-color".to_string()),
        ..Default::default()
    });

    let result = layers.add_points(&[DVec3::X], &options, false);

    assert!(matches!(result, Err(Error::InvalidOptions(_))));
    assert!(layers.ids().is_empty());
    assert!(scene.memory_entities().is_empty());
}

// ============================================================================
// IMAGERY TESTS
// ============================================================================

#[test]
fn test_integration_switch_base_layer() {
    let (scene, mut layers) = setup();
    let base = ImageryLayerOptions { is_base_layer: true, ..Default::default() };
    let streets = layers.imagery_layers_mut().add("streets", osm("https://a"), base.clone()).unwrap();
    let satellite = layers.imagery_layers_mut().add("satellite", osm("https://b"), base).unwrap();

    assert!(layers.imagery_layers_mut().switch_base_layer("satellite"));
    assert_eq!(scene.memory_imagery_layers().stack(), &[satellite, streets]);

    assert!(layers.imagery_layers_mut().switch_base_layer("streets"));
    assert_eq!(scene.memory_imagery_layers().stack(), &[streets, satellite]);

    assert!(!layers.imagery_layers_mut().switch_base_layer("missing"));
}

#[test]
fn test_integration_imagery_options_applied() {
    let (scene, mut layers) = setup();
    let top = layers.imagery_layers_mut().add("top", osm("https://a"), ImageryLayerOptions::default()).unwrap();
    let options = ImageryLayerOptions {
        index: Some(0),
        alpha: Some(0.4),
        show: Some(false),
        ..Default::default()
    };
    let handle = layers.imagery_layers_mut().add("bottom", osm("https://b"), options).unwrap();

    let imagery = scene.memory_imagery_layers();
    assert_eq!(imagery.stack(), &[handle, top]);
    assert_eq!(imagery.adjustments(handle).unwrap().alpha, 0.4);
    assert_eq!(imagery.is_shown(handle), Some(false));
}
