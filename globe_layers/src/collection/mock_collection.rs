/// Mock host collections for unit tests (no rendering host required)
///
/// Records visibility, z-order and notification batching, and can be told
/// to fail after a number of successful adds to exercise rollback paths.

use std::sync::{Arc, Mutex};
use futures::future::BoxFuture;
use slotmap::{Key, SlotMap};
use crate::error::Result;
use crate::layers::{DataSourceLoader, LayerCollections, Layers, LoadRequest};
use crate::sdk_bail;
use super::{
    SceneCollection, EntityCollection, PrimitiveCollection, DataSourceCollection,
    ImageryLayerCollection, EntityDesc, PrimitiveDesc, DataSource, ImageryLayerDesc,
    EntityHandle, PrimitiveHandle, DataSourceHandle, ImageryLayerHandle,
};

// ============================================================================
// Mock object
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockObject<T> {
    pub item: T,
    pub show: bool,
    pub alpha: f32,
    pub brightness: f32,
    pub contrast: f32,
}

// ============================================================================
// Mock collection
// ============================================================================

pub struct MockCollection<T, K: Key> {
    objects: SlotMap<K, MockObject<T>>,
    /// Insertion / stacking order (index 0 = bottom)
    order: Vec<K>,
    /// Number of adds that succeed before every further add fails
    fail_after: Option<usize>,
    successful_adds: usize,
    suspend_depth: usize,
    pending_notification: bool,
    /// Change notifications emitted (batched while suspended)
    pub notifications: usize,
    pub suspend_calls: usize,
    pub resume_calls: usize,
    /// Removes issued for handles that were not present
    pub missed_removes: usize,
}

impl<T, K: Key> MockCollection<T, K> {
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
            fail_after: None,
            successful_adds: 0,
            suspend_depth: 0,
            pending_notification: false,
            notifications: 0,
            suspend_calls: 0,
            resume_calls: 0,
            missed_removes: 0,
        }
    }

    /// Wrap in the shared form registries expect
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Let `count` more adds succeed, then fail every add
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(self.successful_adds + count);
    }

    pub fn object(&self, handle: K) -> Option<&MockObject<T>> {
        self.objects.get(handle)
    }

    pub fn items(&self) -> Vec<&T> {
        self.order.iter().filter_map(|k| self.objects.get(*k)).map(|o| &o.item).collect()
    }

    pub fn order(&self) -> &[K] {
        &self.order
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    /// Host-side removal the registry does not know about
    pub fn remove_externally(&mut self, handle: K) {
        self.objects.remove(handle);
        self.order.retain(|k| *k != handle);
    }

    fn notify(&mut self) {
        if self.suspend_depth > 0 {
            self.pending_notification = true;
        } else {
            self.notifications += 1;
        }
    }
}

impl<T: Send, K: Key + Send> SceneCollection for MockCollection<T, K> {
    type Item = T;
    type Handle = K;

    fn add(&mut self, item: T) -> Result<K> {
        if let Some(limit) = self.fail_after {
            if self.successful_adds >= limit {
                sdk_bail!("globe::mock", "mock add failure after {} adds", limit);
            }
        }
        let handle = self.objects.insert(MockObject {
            item,
            show: true,
            alpha: 1.0,
            brightness: 1.0,
            contrast: 1.0,
        });
        self.order.push(handle);
        self.successful_adds += 1;
        self.notify();
        Ok(handle)
    }

    fn remove(&mut self, handle: K) -> bool {
        if self.objects.remove(handle).is_some() {
            self.order.retain(|k| *k != handle);
            self.notify();
            true
        } else {
            self.missed_removes += 1;
            false
        }
    }

    fn set_show(&mut self, handle: K, visible: bool) -> bool {
        match self.objects.get_mut(handle) {
            Some(object) => {
                object.show = visible;
                true
            }
            None => false,
        }
    }

    fn is_shown(&self, handle: K) -> Option<bool> {
        self.objects.get(handle).map(|o| o.show)
    }

    fn len(&self) -> usize {
        self.objects.len()
    }

    fn suspend_events(&mut self) {
        self.suspend_calls += 1;
        self.suspend_depth += 1;
    }

    fn resume_events(&mut self) {
        self.resume_calls += 1;
        self.suspend_depth = self.suspend_depth.saturating_sub(1);
        if self.suspend_depth == 0 && self.pending_notification {
            self.pending_notification = false;
            self.notifications += 1;
        }
    }
}

pub type MockEntities = MockCollection<EntityDesc, EntityHandle>;
pub type MockPrimitives = MockCollection<PrimitiveDesc, PrimitiveHandle>;
pub type MockDataSources = MockCollection<DataSource, DataSourceHandle>;
pub type MockImageryLayers = MockCollection<ImageryLayerDesc, ImageryLayerHandle>;

impl EntityCollection for MockEntities {}
impl PrimitiveCollection for MockPrimitives {}
impl DataSourceCollection for MockDataSources {}

impl ImageryLayerCollection for MockImageryLayers {
    fn set_alpha(&mut self, handle: ImageryLayerHandle, alpha: f32) -> bool {
        self.objects.get_mut(handle).map(|o| o.alpha = alpha).is_some()
    }

    fn set_brightness(&mut self, handle: ImageryLayerHandle, brightness: f32) -> bool {
        self.objects.get_mut(handle).map(|o| o.brightness = brightness).is_some()
    }

    fn set_contrast(&mut self, handle: ImageryLayerHandle, contrast: f32) -> bool {
        self.objects.get_mut(handle).map(|o| o.contrast = contrast).is_some()
    }

    fn lower_to_bottom(&mut self, handle: ImageryLayerHandle) -> bool {
        match self.order.iter().position(|k| *k == handle) {
            Some(index) => {
                let key = self.order.remove(index);
                self.order.insert(0, key);
                true
            }
            None => false,
        }
    }

    fn raise(&mut self, handle: ImageryLayerHandle) -> bool {
        match self.order.iter().position(|k| *k == handle) {
            Some(index) => {
                if index + 1 < self.order.len() {
                    self.order.swap(index, index + 1);
                }
                true
            }
            None => false,
        }
    }

    fn index_of(&self, handle: ImageryLayerHandle) -> Option<usize> {
        self.order.iter().position(|k| *k == handle)
    }
}

// ============================================================================
// Mock scene
// ============================================================================

/// The five mock collections of one scene
pub struct MockScene {
    pub entities: Arc<Mutex<MockEntities>>,
    pub primitives: Arc<Mutex<MockPrimitives>>,
    pub ground_primitives: Arc<Mutex<MockPrimitives>>,
    pub data_sources: Arc<Mutex<MockDataSources>>,
    pub imagery_layers: Arc<Mutex<MockImageryLayers>>,
}

impl MockScene {
    pub fn new() -> Self {
        Self {
            entities: MockEntities::shared(),
            primitives: MockPrimitives::shared(),
            ground_primitives: MockPrimitives::shared(),
            data_sources: MockDataSources::shared(),
            imagery_layers: MockImageryLayers::shared(),
        }
    }

    pub fn collections(&self) -> LayerCollections {
        LayerCollections {
            entities: self.entities.clone(),
            primitives: self.primitives.clone(),
            ground_primitives: self.ground_primitives.clone(),
            data_sources: self.data_sources.clone(),
            imagery_layers: self.imagery_layers.clone(),
        }
    }

    /// Facade over this scene with a loader that echoes the request
    pub fn layers(&self) -> Layers {
        Layers::new(self.collections(), Arc::new(MockLoader))
    }
}

/// Loader producing an empty document of the requested kind
pub struct MockLoader;

impl DataSourceLoader for MockLoader {
    fn load<'a>(&'a self, request: &'a LoadRequest) -> BoxFuture<'a, Result<DataSource>> {
        Box::pin(async move {
            Ok(DataSource {
                name: String::new(),
                kind: request.kind(),
                url: request.url().to_string(),
                entity_count: 0,
                show: true,
            })
        })
    }
}
