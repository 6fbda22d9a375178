/// Named primitive layers.
///
/// The same manager type serves the host's primitive collection and its
/// ground-primitive collection; only the wrapped collection differs.

use std::sync::{Arc, Mutex};
use crate::collection::{PrimitiveCollection, PrimitiveDesc, PrimitiveHandle};
use crate::error::{Error, Result};
use crate::registry::Registry;

pub struct PrimitiveManager {
    registry: Registry<dyn PrimitiveCollection>,
}

impl PrimitiveManager {
    /// Manager over the host's primitive collection
    pub fn new(primitives: Arc<Mutex<dyn PrimitiveCollection>>) -> Self {
        Self::with_source(primitives, "globe::PrimitiveManager")
    }

    /// Manager over the host's ground-primitive collection
    pub fn ground(primitives: Arc<Mutex<dyn PrimitiveCollection>>) -> Self {
        Self::with_source(primitives, "globe::GroundPrimitiveManager")
    }

    fn with_source(primitives: Arc<Mutex<dyn PrimitiveCollection>>, source: &'static str) -> Self {
        Self {
            registry: Registry::new(primitives, source),
        }
    }

    /// Add one primitive under `name`, replacing any previous entry
    pub fn add(&mut self, name: &str, primitive: PrimitiveDesc) -> Result<PrimitiveHandle> {
        self.add_many(name, vec![primitive])?
            .first()
            .copied()
            .ok_or_else(|| Error::BackendError(format!("no handle returned for '{}'", name)))
    }

    /// Add several primitives under one name (created in order, rolled back together)
    pub fn add_many(&mut self, name: &str, primitives: Vec<PrimitiveDesc>) -> Result<Vec<PrimitiveHandle>> {
        self.registry.add(name, primitives, ())
    }

    pub fn get(&self, name: &str) -> Option<&[PrimitiveHandle]> {
        self.registry.get(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.registry.remove(name)
    }

    pub fn show(&mut self, name: &str, visible: bool) -> bool {
        self.registry.show(name, visible)
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.registry.ids()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn collection(&self) -> &Arc<Mutex<dyn PrimitiveCollection>> {
        self.registry.collection()
    }
}

#[cfg(test)]
#[path = "primitive_manager_tests.rs"]
mod tests;
