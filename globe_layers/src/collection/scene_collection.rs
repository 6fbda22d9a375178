/// Host collection traits.
///
/// The registry layer only needs a minimal contract from the rendering host:
/// create an object from a descriptor, remove it, and toggle its visibility.
/// Each kind of content gets its own trait so hosts can be handed out as
/// `Arc<Mutex<dyn ...Collection>>`.

use std::fmt::Debug;
use std::hash::Hash;
use crate::error::Result;
use super::descriptors::{EntityDesc, PrimitiveDesc, DataSource, ImageryLayerDesc};
use super::handle::{EntityHandle, PrimitiveHandle, DataSourceHandle, ImageryLayerHandle};

/// Minimal contract of a host collection
pub trait SceneCollection: Send {
    /// Descriptor consumed by `add`
    type Item;
    /// Opaque handle returned by `add`
    type Handle: Copy + Eq + Hash + Debug;

    /// Create an object from `item` and return its handle
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the descriptor.
    fn add(&mut self, item: Self::Item) -> Result<Self::Handle>;

    /// Remove an object. Returns false if the handle was not present.
    fn remove(&mut self, handle: Self::Handle) -> bool;

    /// Set the visibility flag of an object. Returns false if the handle was not present.
    fn set_show(&mut self, handle: Self::Handle, visible: bool) -> bool;

    /// Current visibility flag, `None` if the handle is not present
    fn is_shown(&self, handle: Self::Handle) -> Option<bool>;

    /// Number of objects currently in the collection
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, handle: Self::Handle) -> bool {
        self.is_shown(handle).is_some()
    }

    /// Stop emitting change notifications until `resume_events`
    ///
    /// Implementations that batch notifications must nest suspend/resume pairs.
    fn suspend_events(&mut self) {}

    /// Resume change notifications
    fn resume_events(&mut self) {}
}

/// Host entity collection
pub trait EntityCollection: SceneCollection<Item = EntityDesc, Handle = EntityHandle> {}

/// Host primitive collection (scene primitives and ground primitives)
pub trait PrimitiveCollection: SceneCollection<Item = PrimitiveDesc, Handle = PrimitiveHandle> {}

/// Host data source collection
pub trait DataSourceCollection: SceneCollection<Item = DataSource, Handle = DataSourceHandle> {}

/// Host imagery layer stack
///
/// Index 0 is the bottom of the stack (the base layer).
pub trait ImageryLayerCollection: SceneCollection<Item = ImageryLayerDesc, Handle = ImageryLayerHandle> {
    /// Returns false if the handle is not present
    fn set_alpha(&mut self, handle: ImageryLayerHandle, alpha: f32) -> bool;

    /// Returns false if the handle is not present
    fn set_brightness(&mut self, handle: ImageryLayerHandle, brightness: f32) -> bool;

    /// Returns false if the handle is not present
    fn set_contrast(&mut self, handle: ImageryLayerHandle, contrast: f32) -> bool;

    /// Move a layer to the bottom of the stack
    fn lower_to_bottom(&mut self, handle: ImageryLayerHandle) -> bool;

    /// Move a layer one step up the stack
    fn raise(&mut self, handle: ImageryLayerHandle) -> bool;

    /// Position of a layer in the stack
    fn index_of(&self, handle: ImageryLayerHandle) -> Option<usize>;
}
