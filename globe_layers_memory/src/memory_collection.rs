/// In-memory scene collection shared by every object kind.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use slotmap::{Key, SlotMap};
use globe_layers::globe::Result;
use globe_layers::globe::collection::{
    DataSource, DataSourceCollection, DataSourceHandle, EntityCollection, EntityDesc,
    EntityHandle, PrimitiveCollection, PrimitiveDesc, PrimitiveHandle, SceneCollection,
};
use globe_layers::sdk_bail;

/// What the collection needs to know about a stored item
pub trait MemoryItem: Send {
    /// Object id that must be unique within the collection, if any
    fn object_id(&self) -> Option<&str> {
        None
    }

    /// Requested stack position (`None` = append)
    fn insert_index(&self) -> Option<usize> {
        None
    }
}

impl MemoryItem for EntityDesc {
    fn object_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }
}

impl MemoryItem for PrimitiveDesc {}

impl MemoryItem for DataSource {}

#[derive(Debug, Clone)]
pub struct MemoryObject<T> {
    pub item: T,
    pub show: bool,
}

/// Slot-mapped objects with stable insertion order and batched change events
pub struct MemoryCollection<T, K: Key> {
    objects: SlotMap<K, MemoryObject<T>>,
    /// Stack order (index 0 = bottom / first added)
    order: Vec<K>,
    ids: FxHashMap<String, K>,
    suspend_depth: usize,
    pending_change: bool,
    /// Change events raised so far
    change_events: u64,
    label: &'static str,
}

impl<T: MemoryItem, K: Key> MemoryCollection<T, K> {
    pub fn new(label: &'static str) -> Self {
        Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
            ids: FxHashMap::default(),
            suspend_depth: 0,
            pending_change: false,
            change_events: 0,
            label,
        }
    }

    pub fn shared(label: &'static str) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new(label)))
    }

    pub fn get(&self, handle: K) -> Option<&MemoryObject<T>> {
        self.objects.get(handle)
    }

    /// Handle of the object with `id`
    pub fn find(&self, id: &str) -> Option<K> {
        self.ids.get(id).copied()
    }

    /// Items in stack order
    pub fn items(&self) -> Vec<&T> {
        self.order.iter().filter_map(|k| self.objects.get(*k)).map(|o| &o.item).collect()
    }

    pub fn order(&self) -> &[K] {
        &self.order
    }

    pub fn position(&self, handle: K) -> Option<usize> {
        self.order.iter().position(|k| *k == handle)
    }

    pub fn change_events(&self) -> u64 {
        self.change_events
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    /// Move `handle` to stack position `index` (clamped)
    pub fn move_to(&mut self, handle: K, index: usize) -> bool {
        let Some(current) = self.position(handle) else {
            return false;
        };
        let key = self.order.remove(current);
        let index = index.min(self.order.len());
        self.order.insert(index, key);
        self.changed();
        true
    }

    fn changed(&mut self) {
        if self.suspend_depth > 0 {
            self.pending_change = true;
        } else {
            self.change_events += 1;
        }
    }
}

impl<T: MemoryItem, K: Key + Send> SceneCollection for MemoryCollection<T, K> {
    type Item = T;
    type Handle = K;

    fn add(&mut self, item: T) -> Result<K> {
        let id = item.object_id().map(str::to_string);
        if let Some(id) = &id {
            if self.ids.contains_key(id) {
                sdk_bail!(self.label, "An object with id '{}' already exists", id);
            }
        }
        let index = item.insert_index();
        let handle = self.objects.insert(MemoryObject { item, show: true });
        match index {
            Some(index) => self.order.insert(index.min(self.order.len()), handle),
            None => self.order.push(handle),
        }
        if let Some(id) = id {
            self.ids.insert(id, handle);
        }
        self.changed();
        Ok(handle)
    }

    fn remove(&mut self, handle: K) -> bool {
        let Some(object) = self.objects.remove(handle) else {
            return false;
        };
        self.order.retain(|k| *k != handle);
        if let Some(id) = object.item.object_id() {
            self.ids.remove(id);
        }
        self.changed();
        true
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
        self.suspend_depth += 1;
    }

    fn resume_events(&mut self) {
        self.suspend_depth = self.suspend_depth.saturating_sub(1);
        if self.suspend_depth == 0 && self.pending_change {
            self.pending_change = false;
            self.change_events += 1;
        }
    }
}

pub type MemoryEntities = MemoryCollection<EntityDesc, EntityHandle>;
pub type MemoryPrimitives = MemoryCollection<PrimitiveDesc, PrimitiveHandle>;
pub type MemoryDataSources = MemoryCollection<DataSource, DataSourceHandle>;

impl EntityCollection for MemoryEntities {}
impl PrimitiveCollection for MemoryPrimitives {}
impl DataSourceCollection for MemoryDataSources {}
