/// Rendering host contract.

use std::sync::{Arc, Mutex};
use crate::collection::{
    DataSourceCollection, EntityCollection, ImageryLayerCollection, PrimitiveCollection,
};
use crate::error::Result;
use crate::layers::LayerCollections;
use super::ViewerConfig;

/// A 3D globe host: owns the scene collections and applies viewer settings
///
/// Collections are handed out as shared references; the host keeps
/// ownership and may mutate them on its own.
pub trait SceneHost: Send {
    fn entities(&self) -> Arc<Mutex<dyn EntityCollection>>;

    fn primitives(&self) -> Arc<Mutex<dyn PrimitiveCollection>>;

    /// Terrain-clamped primitives
    fn ground_primitives(&self) -> Arc<Mutex<dyn PrimitiveCollection>>;

    fn data_sources(&self) -> Arc<Mutex<dyn DataSourceCollection>>;

    fn imagery_layers(&self) -> Arc<Mutex<dyn ImageryLayerCollection>>;

    /// Apply a viewer configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot honour the configuration
    /// (e.g. context creation refused).
    fn configure(&mut self, config: &ViewerConfig) -> Result<()>;

    /// Frame rate overlay visibility
    fn show_fps(&self) -> bool;

    fn set_show_fps(&mut self, show: bool);

    /// Globe lighting and shadows together
    fn set_lighting(&mut self, enabled: bool);

    /// All five collections at once
    fn layer_collections(&self) -> LayerCollections {
        LayerCollections {
            entities: self.entities(),
            primitives: self.primitives(),
            ground_primitives: self.ground_primitives(),
            data_sources: self.data_sources(),
            imagery_layers: self.imagery_layers(),
        }
    }
}
