/// Point graphic: simplified options resolved into a point shape.

use glam::DVec3;
use crate::collection::{EntityDesc, PointPrimitiveDesc, PointShape};
use crate::error::Result;
use super::{BatchOptions, Color, HeightReference, NearFarScalar, Properties};

/// Id used when a single point is created without one
pub const DEFAULT_POINT_ID: &str = "default_point_id";

/// Point creation options
///
/// Every field is optional; unset fields take the documented default when
/// resolved by [`PointGraphic::new`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointOptions {
    /// Fill color as a CSS string (default `#ff0000`)
    pub color: Option<String>,
    /// Outline color as a CSS string (default `#ffff00`)
    pub outline_color: Option<String>,
    /// Clamp to terrain (default true)
    pub on_ground: Option<bool>,
    /// Pickable by the host (default true)
    pub allow_pick: Option<bool>,
    /// Object id (default `default_point_id`)
    pub id: Option<String>,
    /// Feature attributes (default empty)
    pub properties: Option<Properties>,
    /// Size in pixels (default 10)
    pub pixel_size: Option<f64>,
    /// Outline width in pixels (default 1)
    pub outline_width: Option<f64>,
    pub disable_depth_test_distance: Option<f64>,
    pub scale_by_distance: Option<NearFarScalar>,
    /// Billboard image url
    pub image: Option<String>,
    /// Per-item ids when these options are shared by a batch
    pub ids: Vec<String>,
}

impl BatchOptions for PointOptions {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Resolved point graphic
#[derive(Debug, Clone, PartialEq)]
pub struct PointGraphic {
    pub id: String,
    pub shape: PointShape,
    pub allow_pick: bool,
    pub properties: Properties,
}

impl PointGraphic {
    /// Resolve `options` field by field against the defaults
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` if a color string does not parse.
    pub fn new(options: &PointOptions) -> Result<Self> {
        let color = match &options.color {
            Some(css) => Color::from_css(css)?,
            None => Color::RED,
        };
        let outline_color = match &options.outline_color {
            Some(css) => Color::from_css(css)?,
            None => Color::YELLOW,
        };
        let on_ground = options.on_ground.unwrap_or(true);

        Ok(Self {
            id: options.id.clone().unwrap_or_else(|| DEFAULT_POINT_ID.to_string()),
            shape: PointShape {
                pixel_size: options.pixel_size.unwrap_or(10.0),
                color,
                outline_color,
                outline_width: options.outline_width.unwrap_or(1.0),
                height_reference: HeightReference::from_on_ground(on_ground),
                disable_depth_test_distance: options.disable_depth_test_distance,
                scale_by_distance: options.scale_by_distance,
                image: options.image.clone(),
                show: true,
            },
            allow_pick: options.allow_pick.unwrap_or(true),
            properties: options.properties.clone().unwrap_or_default(),
        })
    }

    /// Same graphic under another id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Entity form at `position`
    ///
    /// `properties` overrides the graphic's own feature attributes.
    pub fn create_entity(&self, position: DVec3, properties: Option<Properties>) -> EntityDesc {
        EntityDesc {
            id: self.id.clone(),
            position: Some(position),
            point: Some(self.shape.clone()),
            properties: properties.unwrap_or_else(|| self.properties.clone()),
            allow_pick: self.allow_pick,
            ..Default::default()
        }
    }

    /// Point-collection member at `position`
    pub fn create_point_primitive(&self, position: DVec3) -> PointPrimitiveDesc {
        PointPrimitiveDesc {
            id: self.id.clone(),
            position,
            shape: self.shape.clone(),
        }
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
