/// Facade over the five named layer managers.
///
/// Name lookups fan out in a fixed priority order: entities, primitives,
/// ground primitives, data sources, imagery layers. The same name may be
/// registered in several managers; the first one wins for `get`, `remove`
/// and `show`.

use std::sync::{Arc, Mutex};
use crate::collection::{
    DataSourceCollection, DataSourceHandle, EntityCollection, EntityHandle,
    ImageryLayerCollection, ImageryLayerHandle, PrimitiveCollection, PrimitiveHandle,
};
use super::{
    DataSourceLoader, DataSourceManager, EntityManager, ImageryLayerManager, PrimitiveManager,
};

/// Host collections a [`Layers`] facade is built over
#[derive(Clone)]
pub struct LayerCollections {
    pub entities: Arc<Mutex<dyn EntityCollection>>,
    pub primitives: Arc<Mutex<dyn PrimitiveCollection>>,
    pub ground_primitives: Arc<Mutex<dyn PrimitiveCollection>>,
    pub data_sources: Arc<Mutex<dyn DataSourceCollection>>,
    pub imagery_layers: Arc<Mutex<dyn ImageryLayerCollection>>,
}

/// Which manager a name resolved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Entity,
    Primitive,
    GroundPrimitive,
    DataSource,
    ImageryLayer,
}

/// Result of a facade lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerObject<'a> {
    Entities(&'a [EntityHandle]),
    Primitives(&'a [PrimitiveHandle]),
    GroundPrimitives(&'a [PrimitiveHandle]),
    DataSource(DataSourceHandle),
    ImageryLayer(ImageryLayerHandle),
}

impl LayerObject<'_> {
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerObject::Entities(_) => LayerKind::Entity,
            LayerObject::Primitives(_) => LayerKind::Primitive,
            LayerObject::GroundPrimitives(_) => LayerKind::GroundPrimitive,
            LayerObject::DataSource(_) => LayerKind::DataSource,
            LayerObject::ImageryLayer(_) => LayerKind::ImageryLayer,
        }
    }
}

pub struct Layers {
    entities: EntityManager,
    primitives: PrimitiveManager,
    ground_primitives: PrimitiveManager,
    data_sources: DataSourceManager,
    imagery_layers: ImageryLayerManager,
}

impl Layers {
    pub fn new(collections: LayerCollections, loader: Arc<dyn DataSourceLoader>) -> Self {
        Self {
            entities: EntityManager::new(collections.entities),
            primitives: PrimitiveManager::new(collections.primitives),
            ground_primitives: PrimitiveManager::ground(collections.ground_primitives),
            data_sources: DataSourceManager::new(collections.data_sources, loader),
            imagery_layers: ImageryLayerManager::new(collections.imagery_layers),
        }
    }

    // ===== MANAGERS =====

    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    pub fn primitives(&self) -> &PrimitiveManager {
        &self.primitives
    }

    pub fn primitives_mut(&mut self) -> &mut PrimitiveManager {
        &mut self.primitives
    }

    pub fn ground_primitives(&self) -> &PrimitiveManager {
        &self.ground_primitives
    }

    pub fn ground_primitives_mut(&mut self) -> &mut PrimitiveManager {
        &mut self.ground_primitives
    }

    pub fn data_sources(&self) -> &DataSourceManager {
        &self.data_sources
    }

    pub fn data_sources_mut(&mut self) -> &mut DataSourceManager {
        &mut self.data_sources
    }

    pub fn imagery_layers(&self) -> &ImageryLayerManager {
        &self.imagery_layers
    }

    pub fn imagery_layers_mut(&mut self) -> &mut ImageryLayerManager {
        &mut self.imagery_layers
    }

    // ===== FAN-OUT =====

    /// First registration of `name` in priority order
    pub fn get(&self, name: &str) -> Option<LayerObject<'_>> {
        if let Some(handles) = self.entities.get(name) {
            return Some(LayerObject::Entities(handles));
        }
        if let Some(handles) = self.primitives.get(name) {
            return Some(LayerObject::Primitives(handles));
        }
        if let Some(handles) = self.ground_primitives.get(name) {
            return Some(LayerObject::GroundPrimitives(handles));
        }
        if let Some(handle) = self.data_sources.get(name) {
            return Some(LayerObject::DataSource(handle));
        }
        self.imagery_layers.get(name).map(LayerObject::ImageryLayer)
    }

    /// Remove the first registration of `name`; false if none
    ///
    /// Registrations of the same name in lower-priority managers stay.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entities.remove(name)
            || self.primitives.remove(name)
            || self.ground_primitives.remove(name)
            || self.data_sources.remove(name)
            || self.imagery_layers.remove(name)
    }

    /// Set visibility on the first registration of `name`; false if none
    pub fn show(&mut self, name: &str, visible: bool) -> bool {
        self.entities.show(name, visible)
            || self.primitives.show(name, visible)
            || self.ground_primitives.show(name, visible)
            || self.data_sources.show(name, visible)
            || self.imagery_layers.show(name, visible)
    }

    /// Clear every manager
    pub fn clear(&mut self) {
        self.entities.clear();
        self.primitives.clear();
        self.ground_primitives.clear();
        self.data_sources.clear();
        self.imagery_layers.clear();
    }

    /// Names of every manager in priority order (duplicates across kinds kept)
    pub fn ids(&self) -> Vec<String> {
        let mut ids = self.entities.ids();
        ids.extend(self.primitives.ids());
        ids.extend(self.ground_primitives.ids());
        ids.extend(self.data_sources.ids());
        ids.extend(self.imagery_layers.ids());
        ids
    }
}

#[cfg(test)]
#[path = "layers_tests.rs"]
mod tests;
