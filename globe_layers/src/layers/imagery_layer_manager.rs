/// Named imagery layers.
///
/// One host imagery layer per name. Creation options are kept with the
/// entry so base layers can be recognised when switching.

use std::sync::{Arc, Mutex};
use crate::collection::{ImageryLayerCollection, ImageryLayerDesc, ImageryLayerHandle};
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::sdk_warn;
use super::ImageryProviderDesc;

/// Layer creation options (unset fields keep the host's defaults)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageryLayerOptions {
    /// Stack position (`None` = on top)
    pub index: Option<usize>,
    pub alpha: Option<f32>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub show: Option<bool>,
    /// Candidate for [`ImageryLayerManager::switch_base_layer`]
    pub is_base_layer: bool,
}

pub struct ImageryLayerManager {
    registry: Registry<dyn ImageryLayerCollection, ImageryLayerOptions>,
}

impl ImageryLayerManager {
    pub fn new(layers: Arc<Mutex<dyn ImageryLayerCollection>>) -> Self {
        Self {
            registry: Registry::new(layers, "globe::ImageryLayerManager"),
        }
    }

    /// Add a layer for `provider` under `name`, replacing any previous one
    ///
    /// The layer is inserted at `options.index` when given, then alpha,
    /// brightness, contrast and visibility are applied if set.
    pub fn add(
        &mut self,
        name: &str,
        provider: ImageryProviderDesc,
        options: ImageryLayerOptions,
    ) -> Result<ImageryLayerHandle> {
        let desc = ImageryLayerDesc {
            provider,
            index: options.index,
        };
        let handle = self
            .registry
            .add(name, vec![desc], options.clone())?
            .first()
            .copied()
            .ok_or_else(|| Error::BackendError(format!("no handle returned for '{}'", name)))?;

        let mut host = self.registry.host();
        if let Some(alpha) = options.alpha {
            host.set_alpha(handle, alpha);
        }
        if let Some(brightness) = options.brightness {
            host.set_brightness(handle, brightness);
        }
        if let Some(contrast) = options.contrast {
            host.set_contrast(handle, contrast);
        }
        if let Some(show) = options.show {
            host.set_show(handle, show);
        }
        Ok(handle)
    }

    /// Layer handle registered under `name`
    pub fn get(&self, name: &str) -> Option<ImageryLayerHandle> {
        self.registry.get(name).and_then(|handles| handles.first().copied())
    }

    /// Options the layer under `name` was created with
    pub fn options(&self, name: &str) -> Option<&ImageryLayerOptions> {
        self.registry.entry(name).map(|entry| entry.meta())
    }

    pub fn show(&mut self, name: &str, visible: bool) -> bool {
        self.registry.show(name, visible)
    }

    /// Set the opacity of the layer under `name`; false if not registered
    pub fn set_alpha(&mut self, name: &str, alpha: f32) -> bool {
        let Some(handle) = self.get(name) else {
            return false;
        };
        let applied = self.registry.host().set_alpha(handle, alpha);
        if applied {
            if let Some(options) = self.registry.meta_mut(name) {
                options.alpha = Some(alpha);
            }
        }
        applied
    }

    /// Make `name` the bottom layer
    ///
    /// The target is lowered to the bottom of the stack and every other
    /// layer flagged as a base layer is raised one step above it. Returns
    /// false (with a warning) if `name` is not registered.
    pub fn switch_base_layer(&mut self, name: &str) -> bool {
        let Some(target) = self.get(name) else {
            sdk_warn!("globe::ImageryLayerManager", "Layer '{}' does not exist", name);
            return false;
        };
        let others: Vec<ImageryLayerHandle> = self
            .registry
            .iter()
            .filter(|(other, entry)| *other != name && entry.meta().is_base_layer)
            .flat_map(|(_, entry)| entry.handles().to_vec())
            .collect();

        let mut host = self.registry.host();
        host.lower_to_bottom(target);
        for handle in others {
            host.raise(handle);
        }
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.registry.remove(name)
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

    pub fn collection(&self) -> &Arc<Mutex<dyn ImageryLayerCollection>> {
        self.registry.collection()
    }
}

#[cfg(test)]
#[path = "imagery_layer_manager_tests.rs"]
mod tests;
