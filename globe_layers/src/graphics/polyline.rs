/// Polyline graphic: simplified options resolved into a polyline shape.

use glam::DVec3;
use crate::collection::{EntityDesc, Geometry, GeometryInstanceDesc, PolylineShape};
use crate::error::Result;
use super::{BatchOptions, Color, Properties};

/// Id used when a single polyline is created without one
pub const DEFAULT_POLYLINE_ID: &str = "default_polyline_id";

/// Polyline creation options (unset fields take the documented default)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolylineOptions {
    /// Line color as a CSS string (default `#ff0f40`)
    pub color: Option<String>,
    /// Width in pixels (default 2)
    pub width: Option<f64>,
    /// Clamp to terrain (default true)
    pub on_ground: Option<bool>,
    /// Pickable by the host (default true)
    pub allow_pick: Option<bool>,
    /// Object id (default `default_polyline_id`)
    pub id: Option<String>,
    pub properties: Option<Properties>,
    /// Draw order among ground polylines (default 0)
    pub z_index: Option<i32>,
    /// Per-item ids when these options are shared by a batch
    pub ids: Vec<String>,
}

impl BatchOptions for PolylineOptions {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Resolved polyline graphic
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineGraphic {
    pub id: String,
    pub material: Color,
    pub width: f64,
    pub clamp_to_ground: bool,
    pub allow_pick: bool,
    pub z_index: i32,
    pub properties: Properties,
}

impl PolylineGraphic {
    /// Resolve `options` against the defaults
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` if the color string does not parse.
    pub fn new(options: &PolylineOptions) -> Result<Self> {
        let material = match &options.color {
            Some(css) => Color::from_css(css)?,
            None => Color::rgb8(0xff, 0x0f, 0x40),
        };
        Ok(Self {
            id: options.id.clone().unwrap_or_else(|| DEFAULT_POLYLINE_ID.to_string()),
            material,
            width: options.width.unwrap_or(2.0),
            clamp_to_ground: options.on_ground.unwrap_or(true),
            allow_pick: options.allow_pick.unwrap_or(true),
            z_index: options.z_index.unwrap_or(0),
            properties: options.properties.clone().unwrap_or_default(),
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    fn shape(&self, positions: Vec<DVec3>) -> PolylineShape {
        PolylineShape {
            positions,
            width: self.width,
            material: self.material,
            clamp_to_ground: self.clamp_to_ground,
            z_index: self.z_index,
            show: true,
        }
    }

    /// Entity form along `positions`
    pub fn create_entity(&self, positions: Vec<DVec3>, properties: Option<Properties>) -> EntityDesc {
        EntityDesc {
            id: self.id.clone(),
            polyline: Some(self.shape(positions)),
            properties: properties.unwrap_or_else(|| self.properties.clone()),
            allow_pick: self.allow_pick,
            ..Default::default()
        }
    }

    /// Per-instance-colored geometry for a batched polyline primitive
    pub fn create_instance(&self, positions: Vec<DVec3>) -> GeometryInstanceDesc {
        GeometryInstanceDesc {
            id: self.id.clone(),
            geometry: Geometry::Polyline {
                positions,
                width: self.width,
                clamp_to_ground: self.clamp_to_ground,
            },
            color: self.material,
        }
    }
}

#[cfg(test)]
#[path = "polyline_tests.rs"]
mod tests;
