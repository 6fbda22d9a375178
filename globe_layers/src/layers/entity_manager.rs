/// Named entity layers.
///
/// Each name owns one or more host entities. Re-adding a name replaces the
/// entities registered under it.

use std::sync::{Arc, Mutex};
use crate::collection::{EntityCollection, EntityDesc, EntityHandle};
use crate::error::{Error, Result};
use crate::registry::Registry;

pub struct EntityManager {
    registry: Registry<dyn EntityCollection>,
}

impl EntityManager {
    /// Create an empty manager over the host's entity collection
    pub fn new(entities: Arc<Mutex<dyn EntityCollection>>) -> Self {
        Self {
            registry: Registry::new(entities, "globe::EntityManager"),
        }
    }

    /// Add `entities` under `name`, replacing any previous entry
    ///
    /// Returns the host handles in the order the descriptors were given.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is blank, `entities` is empty, or the host
    /// rejects an entity (nothing is registered in that case).
    pub fn add(&mut self, name: &str, entities: Vec<EntityDesc>) -> Result<Vec<EntityHandle>> {
        self.registry.add(name, entities, ())
    }

    /// Add a single entity under `name`
    pub fn add_one(&mut self, name: &str, entity: EntityDesc) -> Result<EntityHandle> {
        self.add(name, vec![entity])?
            .first()
            .copied()
            .ok_or_else(|| Error::BackendError(format!("no handle returned for '{}'", name)))
    }

    pub fn get(&self, name: &str) -> Option<&[EntityHandle]> {
        self.registry.get(name)
    }

    /// Remove `name` and its entities; false if not registered
    pub fn remove(&mut self, name: &str) -> bool {
        self.registry.remove(name)
    }

    /// Show or hide every entity under `name`; false if not registered
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

    /// The host entity collection
    pub fn collection(&self) -> &Arc<Mutex<dyn EntityCollection>> {
        self.registry.collection()
    }
}

#[cfg(test)]
#[path = "entity_manager_tests.rs"]
mod tests;
