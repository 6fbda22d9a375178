/// In-memory imagery layer stack.

use std::sync::{Arc, Mutex};
use slotmap::SecondaryMap;
use globe_layers::globe::Result;
use globe_layers::globe::collection::{
    ImageryLayerCollection, ImageryLayerDesc, ImageryLayerHandle, SceneCollection,
};
use crate::memory_collection::{MemoryCollection, MemoryItem, MemoryObject};

impl MemoryItem for ImageryLayerDesc {
    fn insert_index(&self) -> Option<usize> {
        self.index
    }
}

/// Display adjustments of one layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerAdjustments {
    pub alpha: f32,
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for LayerAdjustments {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            brightness: 1.0,
            contrast: 1.0,
        }
    }
}

/// Layer stack where index 0 is the base layer
pub struct MemoryImageryLayers {
    layers: MemoryCollection<ImageryLayerDesc, ImageryLayerHandle>,
    adjustments: SecondaryMap<ImageryLayerHandle, LayerAdjustments>,
}

impl MemoryImageryLayers {
    pub fn new() -> Self {
        Self {
            layers: MemoryCollection::new("globe::memory::ImageryLayers"),
            adjustments: SecondaryMap::new(),
        }
    }

    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn get(&self, handle: ImageryLayerHandle) -> Option<&MemoryObject<ImageryLayerDesc>> {
        self.layers.get(handle)
    }

    pub fn adjustments(&self, handle: ImageryLayerHandle) -> Option<LayerAdjustments> {
        self.adjustments.get(handle).copied()
    }

    /// Handles from bottom to top
    pub fn stack(&self) -> &[ImageryLayerHandle] {
        self.layers.order()
    }

    pub fn change_events(&self) -> u64 {
        self.layers.change_events()
    }

    fn adjust(&mut self, handle: ImageryLayerHandle, apply: impl FnOnce(&mut LayerAdjustments)) -> bool {
        match self.adjustments.get_mut(handle) {
            Some(adjustments) => {
                apply(adjustments);
                true
            }
            None => false,
        }
    }
}

impl Default for MemoryImageryLayers {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCollection for MemoryImageryLayers {
    type Item = ImageryLayerDesc;
    type Handle = ImageryLayerHandle;

    fn add(&mut self, item: ImageryLayerDesc) -> Result<ImageryLayerHandle> {
        let handle = self.layers.add(item)?;
        self.adjustments.insert(handle, LayerAdjustments::default());
        Ok(handle)
    }

    fn remove(&mut self, handle: ImageryLayerHandle) -> bool {
        self.adjustments.remove(handle);
        self.layers.remove(handle)
    }

    fn set_show(&mut self, handle: ImageryLayerHandle, visible: bool) -> bool {
        self.layers.set_show(handle, visible)
    }

    fn is_shown(&self, handle: ImageryLayerHandle) -> Option<bool> {
        self.layers.is_shown(handle)
    }

    fn len(&self) -> usize {
        self.layers.len()
    }

    fn suspend_events(&mut self) {
        self.layers.suspend_events();
    }

    fn resume_events(&mut self) {
        self.layers.resume_events();
    }
}

impl ImageryLayerCollection for MemoryImageryLayers {
    fn set_alpha(&mut self, handle: ImageryLayerHandle, alpha: f32) -> bool {
        self.adjust(handle, |a| a.alpha = alpha.clamp(0.0, 1.0))
    }

    fn set_brightness(&mut self, handle: ImageryLayerHandle, brightness: f32) -> bool {
        self.adjust(handle, |a| a.brightness = brightness)
    }

    fn set_contrast(&mut self, handle: ImageryLayerHandle, contrast: f32) -> bool {
        self.adjust(handle, |a| a.contrast = contrast)
    }

    fn lower_to_bottom(&mut self, handle: ImageryLayerHandle) -> bool {
        self.layers.move_to(handle, 0)
    }

    fn raise(&mut self, handle: ImageryLayerHandle) -> bool {
        match self.layers.position(handle) {
            Some(index) => self.layers.move_to(handle, index + 1),
            None => false,
        }
    }

    fn index_of(&self, handle: ImageryLayerHandle) -> Option<usize> {
        self.layers.position(handle)
    }
}
