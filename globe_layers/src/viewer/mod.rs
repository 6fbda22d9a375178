//! Viewer configuration, the host contract and input events

mod config;
mod host;
mod events;
mod viewer;

pub use config::{
    CameraBinding, CameraBindings, CameraEventType, ContextOptions, KeyboardModifier,
    PowerPreference, SceneMode, ViewerConfig, Widgets,
};
pub use host::SceneHost;
pub use events::{EventEmitter, ListenerId, ScreenEvent, ScreenEventType};
pub use viewer::Viewer;
