/// Named handle registry.
///
/// Maps caller-chosen names to the handles a host collection returned for
/// them, and keeps the two in step: whatever is registered is present in the
/// host, and whatever the registry removes is removed from the host.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use rustc_hash::FxHashMap;
use crate::collection::SceneCollection;
use crate::error::{validate_name, Error, Result};
use crate::{sdk_debug, sdk_trace, sdk_warn};

/// Handles registered under one name, plus per-kind metadata
#[derive(Debug, Clone)]
pub struct RegistryEntry<H, M> {
    handles: Vec<H>,
    meta: M,
}

impl<H, M> RegistryEntry<H, M> {
    /// Handles in the order their descriptors were given
    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    pub fn meta(&self) -> &M {
        &self.meta
    }
}

/// Name-to-handles registry over a shared host collection
///
/// The registry does not own the collection; the host does. `M` carries
/// per-kind metadata (data source type, imagery options, ...).
pub struct Registry<C: SceneCollection + ?Sized, M = ()> {
    collection: Arc<Mutex<C>>,
    entries: FxHashMap<String, RegistryEntry<C::Handle, M>>,
    /// Log source (e.g. "globe::EntityManager")
    source: &'static str,
}

fn lock_host<C: ?Sized>(collection: &Mutex<C>) -> MutexGuard<'_, C> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps host notifications suspended while alive
struct SuspendGuard<'a, C: SceneCollection + ?Sized> {
    collection: MutexGuard<'a, C>,
}

impl<'a, C: SceneCollection + ?Sized> SuspendGuard<'a, C> {
    fn new(mut collection: MutexGuard<'a, C>) -> Self {
        collection.suspend_events();
        Self { collection }
    }
}

impl<C: SceneCollection + ?Sized> Deref for SuspendGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.collection
    }
}

impl<C: SceneCollection + ?Sized> DerefMut for SuspendGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.collection
    }
}

impl<C: SceneCollection + ?Sized> Drop for SuspendGuard<'_, C> {
    fn drop(&mut self) {
        self.collection.resume_events();
    }
}

impl<C: SceneCollection + ?Sized, M> Registry<C, M> {
    /// Create an empty registry over `collection`
    pub fn new(collection: Arc<Mutex<C>>, source: &'static str) -> Self {
        Self {
            collection,
            entries: FxHashMap::default(),
            source,
        }
    }

    /// The wrapped host collection
    pub fn collection(&self) -> &Arc<Mutex<C>> {
        &self.collection
    }

    /// Lock the host collection
    ///
    /// A poisoned lock is recovered: registry operations never leave the
    /// host half-mutated across a panic.
    pub(crate) fn host(&self) -> MutexGuard<'_, C> {
        lock_host(&self.collection)
    }

    /// Register `items` under `name`, replacing any previous entry
    ///
    /// Items are created in order with host notifications suspended for the
    /// whole batch. If the host rejects an item, the handles already created
    /// for this batch are removed again and nothing is registered. The
    /// previous entry under `name` is removed before creation starts, so it
    /// is gone even when the new batch fails.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidName` if `name` is empty or blank
    /// - `Error::InvalidOptions` if `items` is empty
    /// - any error the host returns for an item
    pub fn add(&mut self, name: &str, items: Vec<C::Item>, meta: M) -> Result<Vec<C::Handle>> {
        validate_name(name)?;
        if items.is_empty() {
            return Err(Error::InvalidOptions(format!("nothing to register under '{}'", name)));
        }

        if self.remove(name) {
            sdk_debug!(self.source, "Replacing '{}'", name);
        }

        let handles = self.create_all(name, items)?;
        sdk_debug!(self.source, "Registered '{}' ({} handle(s))", name, handles.len());
        self.entries.insert(
            name.to_string(),
            RegistryEntry { handles: handles.clone(), meta },
        );
        Ok(handles)
    }

    fn create_all(&self, name: &str, items: Vec<C::Item>) -> Result<Vec<C::Handle>> {
        let mut host = SuspendGuard::new(self.host());
        let mut handles = Vec::with_capacity(items.len());
        for item in items {
            match host.add(item) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    sdk_warn!(self.source,
                        "Creating '{}' failed after {} handle(s), rolling back: {}",
                        name, handles.len(), err);
                    for handle in handles.drain(..) {
                        host.remove(handle);
                    }
                    return Err(err);
                }
            }
        }
        Ok(handles)
    }

    /// Handles registered under `name`
    pub fn get(&self, name: &str) -> Option<&[C::Handle]> {
        self.entries.get(name).map(|entry| entry.handles())
    }

    /// Entry (handles and metadata) registered under `name`
    pub fn entry(&self, name: &str) -> Option<&RegistryEntry<C::Handle, M>> {
        self.entries.get(name)
    }

    /// Mutable metadata for `name` (handles stay read-only)
    pub fn meta_mut(&mut self, name: &str) -> Option<&mut M> {
        self.entries.get_mut(name).map(|entry| &mut entry.meta)
    }

    /// Remove `name` from the registry and its handles from the host
    ///
    /// Returns false if `name` is not registered. Handles the host already
    /// dropped on its own are skipped.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(entry) = self.entries.remove(name) else {
            return false;
        };
        let mut host = SuspendGuard::new(self.host());
        for handle in entry.handles {
            if !host.remove(handle) {
                sdk_trace!(self.source, "Handle {:?} of '{}' was already gone", handle, name);
            }
        }
        sdk_debug!(self.source, "Removed '{}'", name);
        true
    }

    /// Set visibility on every handle registered under `name`
    ///
    /// Returns false (and does nothing) if `name` is not registered.
    pub fn show(&mut self, name: &str, visible: bool) -> bool {
        let Some(entry) = self.entries.get(name) else {
            return false;
        };
        let mut host = self.host();
        for handle in entry.handles() {
            if !host.set_show(*handle, visible) {
                sdk_trace!(self.source, "Handle {:?} of '{}' was already gone", handle, name);
            }
        }
        true
    }

    /// Remove every entry from the host and empty the registry
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let count = self.entries.len();
        {
            let mut host = SuspendGuard::new(lock_host(&self.collection));
            for (_, entry) in self.entries.drain() {
                for handle in entry.handles {
                    host.remove(handle);
                }
            }
        }
        sdk_debug!(self.source, "Cleared {} entries", count);
    }

    /// All registered names (no particular order)
    pub fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over registered names and entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry<C::Handle, M>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
