/// Descriptors handed to host collections.
///
/// These are plain data: the host turns them into its own scene objects and
/// hands back a handle. Nothing here talks to the host.

use glam::DVec3;
use crate::graphics::{Color, HeightReference, NearFarScalar, Properties};
use crate::layers::ImageryProviderDesc;

// ===== SHAPES =====

/// Resolved point appearance
#[derive(Debug, Clone, PartialEq)]
pub struct PointShape {
    pub pixel_size: f64,
    pub color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
    pub height_reference: HeightReference,
    pub disable_depth_test_distance: Option<f64>,
    pub scale_by_distance: Option<NearFarScalar>,
    pub image: Option<String>,
    pub show: bool,
}

/// Resolved polyline appearance and geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    pub positions: Vec<DVec3>,
    pub width: f64,
    pub material: Color,
    pub clamp_to_ground: bool,
    pub z_index: i32,
    pub show: bool,
}

/// Resolved polygon appearance and outer ring
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub hierarchy: Vec<DVec3>,
    pub material: Color,
    pub height_reference: HeightReference,
    pub z_index: i32,
}

// ===== ENTITIES =====

/// Entity to create in the host's entity collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityDesc {
    /// Host-visible object id (hosts may reject duplicates)
    pub id: String,
    pub position: Option<DVec3>,
    pub point: Option<PointShape>,
    pub polyline: Option<PolylineShape>,
    pub polygon: Option<PolygonShape>,
    pub properties: Properties,
    pub allow_pick: bool,
}

impl EntityDesc {
    /// Empty entity with an id (no graphics attached)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            allow_pick: true,
            ..Default::default()
        }
    }
}

// ===== PRIMITIVES =====

/// Single point inside a point collection primitive
#[derive(Debug, Clone, PartialEq)]
pub struct PointPrimitiveDesc {
    pub id: String,
    pub position: DVec3,
    pub shape: PointShape,
}

/// Geometry carried by a geometry instance
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polyline {
        positions: Vec<DVec3>,
        width: f64,
        clamp_to_ground: bool,
    },
    Polygon {
        hierarchy: Vec<DVec3>,
    },
}

/// One per-instance-colored geometry batched into a primitive
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryInstanceDesc {
    pub id: String,
    pub geometry: Geometry,
    pub color: Color,
}

/// Primitive to create in a host primitive collection
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveDesc {
    /// Point primitive collection
    Points(Vec<PointPrimitiveDesc>),
    /// Batched polylines (ground polyline primitive when `on_ground`)
    Polylines {
        instances: Vec<GeometryInstanceDesc>,
        on_ground: bool,
    },
    /// Batched polygons with a per-instance color appearance
    Polygons {
        instances: Vec<GeometryInstanceDesc>,
        on_ground: bool,
        translucent: bool,
    },
}

impl PrimitiveDesc {
    /// Number of individual objects batched in this primitive
    pub fn instance_count(&self) -> usize {
        match self {
            PrimitiveDesc::Points(points) => points.len(),
            PrimitiveDesc::Polylines { instances, .. } => instances.len(),
            PrimitiveDesc::Polygons { instances, .. } => instances.len(),
        }
    }
}

// ===== DATA SOURCES =====

/// Data source format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceKind {
    GeoJson,
    Czml,
    Kml,
}

impl DataSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceKind::GeoJson => "geojson",
            DataSourceKind::Czml => "czml",
            DataSourceKind::Kml => "kml",
        }
    }
}

/// Loaded data source ready to be attached to the host
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    /// Display name (set to the registry name on registration)
    pub name: String,
    pub kind: DataSourceKind,
    /// Where the document came from
    pub url: String,
    /// Number of entities the document produced
    pub entity_count: usize,
    pub show: bool,
}

// ===== IMAGERY =====

/// Imagery layer to create in the host's layer collection
#[derive(Debug, Clone, PartialEq)]
pub struct ImageryLayerDesc {
    pub provider: ImageryProviderDesc,
    /// Insert position in the layer stack (`None` = on top)
    pub index: Option<usize>,
}
