/// In-memory scene host.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use globe_layers::globe::{Error, Result, SceneHost, ViewerConfig};
use globe_layers::globe::collection::{
    DataSourceCollection, EntityCollection, ImageryLayerCollection, ImageryLayerDesc,
    PrimitiveCollection, SceneCollection,
};
use globe_layers::sdk_debug;
use crate::memory_collection::{MemoryDataSources, MemoryEntities, MemoryPrimitives};
use crate::memory_imagery::MemoryImageryLayers;

fn lock<T: ?Sized>(collection: &Mutex<T>) -> MutexGuard<'_, T> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scene host that keeps every collection in process memory
///
/// Records the last applied configuration so tests can inspect it.
pub struct MemoryScene {
    entities: Arc<Mutex<MemoryEntities>>,
    primitives: Arc<Mutex<MemoryPrimitives>>,
    ground_primitives: Arc<Mutex<MemoryPrimitives>>,
    data_sources: Arc<Mutex<MemoryDataSources>>,
    imagery_layers: Arc<Mutex<MemoryImageryLayers>>,
    config: Option<ViewerConfig>,
    show_fps: bool,
    lighting: bool,
    /// Rendering context reports a major performance caveat
    performance_caveat: bool,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self {
            entities: MemoryEntities::shared("globe::memory::Entities"),
            primitives: MemoryPrimitives::shared("globe::memory::Primitives"),
            ground_primitives: MemoryPrimitives::shared("globe::memory::GroundPrimitives"),
            data_sources: MemoryDataSources::shared("globe::memory::DataSources"),
            imagery_layers: MemoryImageryLayers::shared(),
            config: None,
            show_fps: false,
            lighting: false,
            performance_caveat: false,
        }
    }

    /// Host whose context refuses configs with `fail_if_major_performance_caveat`
    pub fn with_performance_caveat(mut self) -> Self {
        self.performance_caveat = true;
        self
    }

    pub fn memory_entities(&self) -> MutexGuard<'_, MemoryEntities> {
        lock(&self.entities)
    }

    pub fn memory_primitives(&self) -> MutexGuard<'_, MemoryPrimitives> {
        lock(&self.primitives)
    }

    pub fn memory_ground_primitives(&self) -> MutexGuard<'_, MemoryPrimitives> {
        lock(&self.ground_primitives)
    }

    pub fn memory_data_sources(&self) -> MutexGuard<'_, MemoryDataSources> {
        lock(&self.data_sources)
    }

    pub fn memory_imagery_layers(&self) -> MutexGuard<'_, MemoryImageryLayers> {
        lock(&self.imagery_layers)
    }

    /// Last configuration applied by `configure`
    pub fn applied_config(&self) -> Option<&ViewerConfig> {
        self.config.as_ref()
    }

    pub fn lighting(&self) -> bool {
        self.lighting
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for MemoryScene {
    fn entities(&self) -> Arc<Mutex<dyn EntityCollection>> {
        self.entities.clone()
    }

    fn primitives(&self) -> Arc<Mutex<dyn PrimitiveCollection>> {
        self.primitives.clone()
    }

    fn ground_primitives(&self) -> Arc<Mutex<dyn PrimitiveCollection>> {
        self.ground_primitives.clone()
    }

    fn data_sources(&self) -> Arc<Mutex<dyn DataSourceCollection>> {
        self.data_sources.clone()
    }

    fn imagery_layers(&self) -> Arc<Mutex<dyn ImageryLayerCollection>> {
        self.imagery_layers.clone()
    }

    fn configure(&mut self, config: &ViewerConfig) -> Result<()> {
        if self.performance_caveat && config.context.fail_if_major_performance_caveat {
            return Err(Error::InitializationFailed(
                "rendering context has a major performance caveat".to_string(),
            ));
        }

        if let Some(provider) = &config.base_layer {
            lock(&self.imagery_layers).add(ImageryLayerDesc {
                provider: provider.clone(),
                index: Some(0),
            })?;
        }
        self.lighting = config.shadows;
        self.config = Some(config.clone());
        sdk_debug!("globe::memory::Scene", "Configured ({:?} mode)", config.scene_mode);
        Ok(())
    }

    fn show_fps(&self) -> bool {
        self.show_fps
    }

    fn set_show_fps(&mut self, show: bool) {
        self.show_fps = show;
    }

    fn set_lighting(&mut self, enabled: bool) {
        self.lighting = enabled;
    }
}
