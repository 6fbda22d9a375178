/// Viewer configuration presets.

use bitflags::bitflags;
use crate::graphics::Rectangle;
use crate::layers::ImageryProviderDesc;

bitflags! {
    /// Host UI widgets to create
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Widgets: u32 {
        const ANIMATION = 1 << 0;
        const FULLSCREEN_BUTTON = 1 << 1;
        const GEOCODER = 1 << 2;
        const HOME_BUTTON = 1 << 3;
        const INFO_BOX = 1 << 4;
        const SCENE_MODE_PICKER = 1 << 5;
        const TIMELINE = 1 << 6;
        const BASE_LAYER_PICKER = 1 << 7;
        const NAVIGATION_HELP_BUTTON = 1 << 8;
        const VR_BUTTON = 1 << 9;
        const SELECTION_INDICATOR = 1 << 10;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneMode {
    #[default]
    Scene3D,
    Scene2D,
    ColumbusView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerPreference {
    Default,
    #[default]
    HighPerformance,
    LowPower,
}

/// Rendering context attributes requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    /// Keep the drawing buffer between frames (needed for canvas capture)
    pub preserve_drawing_buffer: bool,
    /// Refuse to start on devices with a major performance caveat
    pub fail_if_major_performance_caveat: bool,
    pub antialias: bool,
    pub alpha: bool,
    pub power_preference: PowerPreference,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            preserve_drawing_buffer: false,
            fail_if_major_performance_caveat: true,
            antialias: true,
            alpha: true,
            power_preference: PowerPreference::HighPerformance,
        }
    }
}

/// Camera input that drives a camera action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraEventType {
    LeftDrag,
    RightDrag,
    MiddleDrag,
    Wheel,
    Pinch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardModifier {
    Shift,
    Ctrl,
    Alt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraBinding {
    pub event: CameraEventType,
    pub modifier: Option<KeyboardModifier>,
}

impl CameraBinding {
    pub fn new(event: CameraEventType) -> Self {
        Self { event, modifier: None }
    }

    pub fn with_modifier(event: CameraEventType, modifier: KeyboardModifier) -> Self {
        Self { event, modifier: Some(modifier) }
    }
}

/// Zoom and tilt input bindings for the camera controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraBindings {
    pub zoom: Vec<CameraBinding>,
    pub tilt: Vec<CameraBinding>,
}

impl CameraBindings {
    /// Mapbox-like controls: middle drag zooms, right drag tilts
    pub fn mapbox() -> Self {
        use CameraEventType::*;
        Self {
            zoom: vec![
                CameraBinding::new(Wheel),
                CameraBinding::new(MiddleDrag),
                CameraBinding::new(Pinch),
            ],
            tilt: vec![
                CameraBinding::new(RightDrag),
                CameraBinding::new(Pinch),
                CameraBinding::with_modifier(RightDrag, KeyboardModifier::Ctrl),
                CameraBinding::with_modifier(MiddleDrag, KeyboardModifier::Ctrl),
            ],
        }
    }
}

/// Viewer construction options
///
/// `Default` is the preset: no widgets, 3D only, animated clock, terrain
/// depth testing and camera collision on, credits and frame rate hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub widgets: Widgets,
    pub scene_mode: SceneMode,
    pub scene_3d_only: bool,
    pub order_independent_translucency: bool,
    pub should_animate: bool,
    pub shadows: bool,
    /// Hide objects below the terrain surface
    pub depth_test_against_terrain: bool,
    /// Clock rate (1.0 = real time)
    pub clock_multiplier: f64,
    /// Keep the camera above ground
    pub enable_collision_detection: bool,
    pub show_credits: bool,
    /// Show the frame rate overlay
    pub fps_show: bool,
    /// Use [`CameraBindings::mapbox`] for camera input
    pub mapbox_controller: bool,
    /// Imagery/terrain service token
    pub access_token: Option<String>,
    /// Initial camera extent
    pub default_view_rectangle: Rectangle,
    /// Initial base imagery (`None` = no base layer, offline friendly)
    pub base_layer: Option<ImageryProviderDesc>,
    pub context: ContextOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            widgets: Widgets::empty(),
            scene_mode: SceneMode::Scene3D,
            scene_3d_only: true,
            order_independent_translucency: true,
            should_animate: true,
            shadows: false,
            depth_test_against_terrain: true,
            clock_multiplier: 1.0,
            enable_collision_detection: true,
            show_credits: false,
            fps_show: false,
            mapbox_controller: false,
            access_token: None,
            default_view_rectangle: Rectangle::from_degrees(70.0, -15.0, 140.0, 80.0),
            base_layer: None,
            context: ContextOptions::default(),
        }
    }
}

impl ViewerConfig {
    /// Camera bindings to install, if the preset overrides the host's
    pub fn camera_bindings(&self) -> Option<CameraBindings> {
        self.mapbox_controller.then(CameraBindings::mapbox)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
