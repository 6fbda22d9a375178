use super::*;
use glam::DVec3;
use crate::graphics::PolylineGraphic;

fn ring() -> Vec<DVec3> {
    vec![DVec3::X, DVec3::Y, DVec3::Z]
}

#[test]
fn test_polygon_defaults() {
    let graphic = PolygonGraphic::new(&PolygonOptions::default()).unwrap();

    assert_eq!(graphic.id, DEFAULT_POLYGON_ID);
    assert_eq!(graphic.material.to_rgba8(), [255, 0, 0, 255]);
    assert!(graphic.outline);
    assert_eq!(graphic.outline_width, 1.0);
    assert_eq!(graphic.outline_color.to_rgba8(), [0, 255, 0, 255]);
    assert_eq!(graphic.height_reference, HeightReference::ClampToGround);
    assert_eq!(graphic.z_index, 0);
}

#[test]
fn test_polygon_entity_carries_outline() {
    let graphic = PolygonGraphic::new(&PolygonOptions::default()).unwrap();
    let entity = graphic.create_entity(ring(), None);

    let polygon = entity.polygon.unwrap();
    assert_eq!(polygon.hierarchy, ring());
    let outline = entity.polyline.unwrap();
    assert!(outline.show);
    assert!(outline.clamp_to_ground);
    assert_eq!(outline.material, graphic.outline_color);
    assert_eq!(outline.positions, ring());
}

#[test]
fn test_polygon_outline_off_hides_polyline() {
    let options = PolygonOptions {
        outline: Some(false),
        on_ground: Some(false),
        ..Default::default()
    };
    let entity = PolygonGraphic::new(&options).unwrap().create_entity(ring(), None);

    let outline = entity.polyline.unwrap();
    assert!(!outline.show);
    assert!(!outline.clamp_to_ground);
    assert_eq!(entity.polygon.unwrap().height_reference, HeightReference::None);
}

#[test]
fn test_polygon_create_instance() {
    let graphic = PolygonGraphic::new(&PolygonOptions::default()).unwrap().with_id("lot-7");
    let instance = graphic.create_instance(ring());

    assert_eq!(instance.id, "lot-7");
    assert_eq!(instance.geometry, Geometry::Polygon { hierarchy: ring() });
    assert_eq!(instance.color, graphic.material);
}

#[test]
fn test_outline_line_options_use_outline_style() {
    let options = PolygonOptions {
        outline_color: Some("#0000ff".to_string()),
        outline_width: Some(3.0),
        on_ground: Some(false),
        ids: vec!["a".to_string()],
        ..Default::default()
    };
    let line = options.outline_line_options();

    assert_eq!(line.color.as_deref(), Some("#0000ff"));
    assert_eq!(line.width, Some(3.0));
    assert_eq!(line.on_ground, Some(false));
    assert_eq!(line.ids, vec!["a".to_string()]);
}

#[test]
fn test_outline_line_options_default_style() {
    let line = PolygonOptions::default().outline_line_options();
    let graphic = PolylineGraphic::new(&line).unwrap();

    assert_eq!(graphic.material.to_rgba8(), [0, 255, 0, 255]);
    assert_eq!(graphic.width, 1.0);
}
