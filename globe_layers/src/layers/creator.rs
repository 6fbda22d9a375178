/// Point, line and polygon creators on the [`Layers`] facade.
///
/// Each call registers its objects under a fresh random id and returns that
/// id with the handles it produced.

use glam::DVec3;
use crate::collection::{EntityHandle, PrimitiveHandle};
use crate::error::Result;
use crate::graphics::{
    self, random_id, OptionSet, PointOptions, PolygonOptions, PolylineOptions,
};
use crate::sdk_debug;
use super::Layers;

/// Objects registered by one creator call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddedLayer {
    /// Registry name the objects were added under
    pub id: String,
    pub entities: Vec<EntityHandle>,
    pub primitives: Vec<PrimitiveHandle>,
    pub ground_primitives: Vec<PrimitiveHandle>,
}

impl AddedLayer {
    fn new(id: String) -> Self {
        Self { id, ..Default::default() }
    }
}

impl Layers {
    /// Add points as entities, or as one point-collection primitive
    pub fn add_points(
        &mut self,
        positions: &[DVec3],
        options: &OptionSet<PointOptions>,
        use_primitive: bool,
    ) -> Result<AddedLayer> {
        let mut added = AddedLayer::new(random_id());
        if use_primitive {
            let primitive = graphics::points_as_primitive(positions, options)?;
            added.primitives.push(self.primitives_mut().add(&added.id, primitive)?);
        } else {
            let entities = graphics::points_as_entities(positions, options)?;
            added.entities = self.entities_mut().add(&added.id, entities)?;
        }
        sdk_debug!("globe::Layers", "Added {} point(s) as '{}'", positions.len(), added.id);
        Ok(added)
    }

    /// Add lines as entities, or as one batched polyline primitive
    pub fn add_lines(
        &mut self,
        positions_list: &[Vec<DVec3>],
        options: &OptionSet<PolylineOptions>,
        use_primitive: bool,
    ) -> Result<AddedLayer> {
        let mut added = AddedLayer::new(random_id());
        if use_primitive {
            let primitive = graphics::lines_as_primitive(positions_list, options)?;
            added.primitives.push(self.primitives_mut().add(&added.id, primitive)?);
        } else {
            let entities = graphics::lines_as_entities(positions_list, options)?;
            added.entities = self.entities_mut().add(&added.id, entities)?;
        }
        sdk_debug!("globe::Layers", "Added {} line(s) as '{}'", positions_list.len(), added.id);
        Ok(added)
    }

    /// Add polygons as entities, or as a ground fill primitive plus outlines
    ///
    /// In primitive form the fill goes to the ground-primitive manager and
    /// the outline (when the first option set asks for one) to the primitive
    /// manager, both under the returned id. An unset `outline` counts as
    /// `true`, so it produces an outline primitive; pass `Some(false)` to get
    /// the fill alone. If the outline cannot be created the fill is removed
    /// again.
    pub fn add_polygons(
        &mut self,
        positions_list: &[Vec<DVec3>],
        options: &OptionSet<PolygonOptions>,
        use_primitive: bool,
    ) -> Result<AddedLayer> {
        let mut added = AddedLayer::new(random_id());
        if use_primitive {
            let built = graphics::polygons_as_primitives(positions_list, options)?;
            added.ground_primitives.push(self.ground_primitives_mut().add(&added.id, built.fill)?);
            if let Some(outline) = built.outline {
                match self.primitives_mut().add(&added.id, outline) {
                    Ok(handle) => added.primitives.push(handle),
                    Err(err) => {
                        self.ground_primitives_mut().remove(&added.id);
                        return Err(err);
                    }
                }
            }
        } else {
            let entities = graphics::polygons_as_entities(positions_list, options)?;
            added.entities = self.entities_mut().add(&added.id, entities)?;
        }
        sdk_debug!("globe::Layers", "Added {} polygon(s) as '{}'", positions_list.len(), added.id);
        Ok(added)
    }
}

#[cfg(test)]
#[path = "creator_tests.rs"]
mod tests;
