//! Host collection seam
//!
//! Traits the rendering host implements, the handles it returns and the
//! descriptors it consumes.

mod handle;
mod scene_collection;
mod descriptors;
#[cfg(test)]
pub(crate) mod mock_collection;

pub use handle::{EntityHandle, PrimitiveHandle, DataSourceHandle, ImageryLayerHandle};
pub use scene_collection::{
    SceneCollection, EntityCollection, PrimitiveCollection,
    DataSourceCollection, ImageryLayerCollection,
};
pub use descriptors::{
    PointShape, PolylineShape, PolygonShape,
    EntityDesc, PointPrimitiveDesc, Geometry, GeometryInstanceDesc, PrimitiveDesc,
    DataSourceKind, DataSource, ImageryLayerDesc,
};
