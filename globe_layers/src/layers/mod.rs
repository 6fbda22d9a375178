//! Named layer managers and the `Layers` facade
//!
//! One manager per host collection kind, each a thin typed wrapper over a
//! [`Registry`](crate::registry::Registry).

mod entity_manager;
mod primitive_manager;
mod data_source_manager;
mod imagery_layer_manager;
mod imagery_provider;
mod layers;
mod creator;

pub use entity_manager::EntityManager;
pub use primitive_manager::PrimitiveManager;
pub use data_source_manager::{
    DataSourceLoader, DataSourceManager, GeoJsonLoadOptions, LoadRequest, LoadTicket,
};
pub use imagery_layer_manager::{ImageryLayerManager, ImageryLayerOptions};
pub use imagery_provider::{
    geoserver_provider, GeoserverOptions, ImageryProviderDesc, ServiceType, TilingScheme,
};
pub use layers::{LayerCollections, LayerKind, LayerObject, Layers};
pub use creator::AddedLayer;
