//! Graphic option shims
//!
//! Simplified option structs for points, polylines and polygons, resolved
//! field by field against documented defaults into host descriptors.

mod color;
mod geo;
mod options;
mod point;
mod polyline;
mod polygon;
mod batch;

pub use color::Color;
pub use geo::{
    position_from_degrees, position_from_radians, positions_from_degrees,
    NearFarScalar, Rectangle, WGS84_RADIUS_EQUATOR, WGS84_RADIUS_POLAR,
};
pub use options::{random_id, BatchOptions, HeightReference, OptionSet, Properties};
pub use point::{PointGraphic, PointOptions, DEFAULT_POINT_ID};
pub use polyline::{PolylineGraphic, PolylineOptions, DEFAULT_POLYLINE_ID};
pub use polygon::{PolygonGraphic, PolygonOptions, DEFAULT_POLYGON_ID};
pub use batch::{
    lines_as_entities, lines_as_primitive, points_as_entities, points_as_primitive,
    polygons_as_entities, polygons_as_primitives, PolygonPrimitives,
};
