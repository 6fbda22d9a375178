/// Polygon graphic: fill plus optional outline polyline.

use glam::DVec3;
use crate::collection::{EntityDesc, Geometry, GeometryInstanceDesc, PolygonShape, PolylineShape};
use crate::error::Result;
use super::{BatchOptions, Color, HeightReference, PolylineOptions, Properties};

/// Id used when a single polygon is created without one
pub const DEFAULT_POLYGON_ID: &str = "default_polygon_id";

const DEFAULT_OUTLINE_COLOR: &str = "#00ff00";

/// Polygon creation options (unset fields take the documented default)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonOptions {
    /// Fill color as a CSS string (default `#ff0000`)
    pub color: Option<String>,
    /// Clamp to terrain (default true)
    pub on_ground: Option<bool>,
    /// Draw the outline polyline (default true)
    pub outline: Option<bool>,
    /// Outline width in pixels (default 1)
    pub outline_width: Option<f64>,
    /// Outline color as a CSS string (default `#00ff00`)
    pub outline_color: Option<String>,
    /// Object id (default `default_polygon_id`)
    pub id: Option<String>,
    pub properties: Option<Properties>,
    pub z_index: Option<i32>,
    /// Per-item ids when these options are shared by a batch
    pub ids: Vec<String>,
}

impl PolygonOptions {
    pub fn resolved_outline(&self) -> bool {
        self.outline.unwrap_or(true)
    }

    /// Polyline options drawing this polygon's outline
    ///
    /// Outline color and width become the line's color and width; id,
    /// ground clamping and properties carry over.
    pub fn outline_line_options(&self) -> PolylineOptions {
        PolylineOptions {
            color: Some(
                self.outline_color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OUTLINE_COLOR.to_string()),
            ),
            width: Some(self.outline_width.unwrap_or(1.0)),
            on_ground: self.on_ground,
            allow_pick: None,
            id: self.id.clone(),
            properties: self.properties.clone(),
            z_index: self.z_index,
            ids: self.ids.clone(),
        }
    }
}

impl BatchOptions for PolygonOptions {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Resolved polygon graphic
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonGraphic {
    pub id: String,
    pub material: Color,
    pub outline: bool,
    pub outline_width: f64,
    pub outline_color: Color,
    pub height_reference: HeightReference,
    pub z_index: i32,
    pub properties: Properties,
}

impl PolygonGraphic {
    /// Resolve `options` against the defaults
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` if a color string does not parse.
    pub fn new(options: &PolygonOptions) -> Result<Self> {
        let material = match &options.color {
            Some(css) => Color::from_css(css)?,
            None => Color::RED,
        };
        let outline_color = Color::from_css(
            options.outline_color.as_deref().unwrap_or(DEFAULT_OUTLINE_COLOR),
        )?;
        Ok(Self {
            id: options.id.clone().unwrap_or_else(|| DEFAULT_POLYGON_ID.to_string()),
            material,
            outline: options.resolved_outline(),
            outline_width: options.outline_width.unwrap_or(1.0),
            outline_color,
            height_reference: HeightReference::from_on_ground(options.on_ground.unwrap_or(true)),
            z_index: options.z_index.unwrap_or(0),
            properties: options.properties.clone().unwrap_or_default(),
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Entity form with the fill and an outline polyline along the ring
    ///
    /// The outline polyline is always attached and hidden when `outline` is off.
    pub fn create_entity(&self, positions: Vec<DVec3>, properties: Option<Properties>) -> EntityDesc {
        EntityDesc {
            id: self.id.clone(),
            polygon: Some(PolygonShape {
                hierarchy: positions.clone(),
                material: self.material,
                height_reference: self.height_reference,
                z_index: self.z_index,
            }),
            polyline: Some(PolylineShape {
                positions,
                width: self.outline_width,
                material: self.outline_color,
                clamp_to_ground: self.height_reference.is_clamped(),
                z_index: self.z_index,
                show: self.outline,
            }),
            properties: properties.unwrap_or_else(|| self.properties.clone()),
            allow_pick: true,
            ..Default::default()
        }
    }

    /// Fill geometry for a batched polygon primitive
    pub fn create_instance(&self, positions: Vec<DVec3>) -> GeometryInstanceDesc {
        GeometryInstanceDesc {
            id: self.id.clone(),
            geometry: Geometry::Polygon { hierarchy: positions },
            color: self.material,
        }
    }
}

#[cfg(test)]
#[path = "polygon_tests.rs"]
mod tests;
