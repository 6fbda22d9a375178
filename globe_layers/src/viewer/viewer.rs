/// Viewer: a configured host plus its layer facade and input listeners.

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::layers::{DataSourceLoader, Layers};
use crate::{sdk_error, sdk_info};
use super::{EventEmitter, SceneHost, ViewerConfig};

pub struct Viewer<H: SceneHost> {
    host: H,
    config: ViewerConfig,
    layers: Layers,
    events: EventEmitter,
}

impl<H: SceneHost> Viewer<H> {
    /// Configure `host` and build the layer managers over its collections
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` if the host rejects the configuration.
    pub fn new(mut host: H, config: ViewerConfig, loader: Arc<dyn DataSourceLoader>) -> Result<Self> {
        if let Err(err) = host.configure(&config) {
            sdk_error!("globe::Viewer", "Host configuration failed: {}", err);
            return Err(match err {
                Error::InitializationFailed(_) => err,
                other => Error::InitializationFailed(other.to_string()),
            });
        }
        host.set_show_fps(config.fps_show);

        let layers = Layers::new(host.layer_collections(), loader);
        sdk_info!("globe::Viewer", "Viewer initialized");
        Ok(Self {
            host,
            config,
            layers,
            events: EventEmitter::new(),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Configuration the viewer was created with
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut Layers {
        &mut self.layers
    }

    pub fn events(&self) -> &EventEmitter {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventEmitter {
        &mut self.events
    }

    /// Whether the frame rate overlay is shown
    pub fn fps(&self) -> bool {
        self.host.show_fps()
    }

    pub fn set_fps(&mut self, show: bool) {
        self.host.set_show_fps(show);
    }

    /// Turn globe lighting and shadows on or off
    pub fn set_light_shadow(&mut self, enabled: bool) {
        self.host.set_lighting(enabled);
        self.config.shadows = enabled;
    }
}
