/// Batch builders: many points, lines or polygons from one option set.
///
/// Each builder produces either entity descriptors (one per item) or a
/// single batched primitive descriptor. Item ids follow the option set's
/// id policy (see [`OptionSet::item`]).

use glam::DVec3;
use crate::collection::{EntityDesc, PrimitiveDesc};
use crate::error::{Error, Result};
use super::{
    OptionSet, PointGraphic, PointOptions, PolygonGraphic, PolygonOptions,
    PolylineGraphic, PolylineOptions,
};

/// Primitive form of a polygon batch
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitives {
    /// Filled polygons (ground primitive)
    pub fill: PrimitiveDesc,
    /// Outline polylines, when the first option set asks for an outline
    pub outline: Option<PrimitiveDesc>,
}

fn check_batch<T: super::BatchOptions>(kind: &str, count: usize, options: &OptionSet<T>) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidOptions(format!("no {} positions given", kind)));
    }
    options.check_len(count)
}

// ===== POINTS =====

pub fn points_as_entities(positions: &[DVec3], options: &OptionSet<PointOptions>) -> Result<Vec<EntityDesc>> {
    check_batch("point", positions.len(), options)?;
    positions
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let (item, id) = options.item(index)?;
            Ok(PointGraphic::new(item)?.with_id(id).create_entity(*position, None))
        })
        .collect()
}

/// One point-collection primitive holding every point
pub fn points_as_primitive(positions: &[DVec3], options: &OptionSet<PointOptions>) -> Result<PrimitiveDesc> {
    check_batch("point", positions.len(), options)?;
    let points = positions
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let (item, id) = options.item(index)?;
            Ok(PointGraphic::new(item)?.with_id(id).create_point_primitive(*position))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PrimitiveDesc::Points(points))
}

// ===== LINES =====

pub fn lines_as_entities(
    positions_list: &[Vec<DVec3>],
    options: &OptionSet<PolylineOptions>,
) -> Result<Vec<EntityDesc>> {
    check_batch("line", positions_list.len(), options)?;
    positions_list
        .iter()
        .enumerate()
        .map(|(index, positions)| {
            let (item, id) = options.item(index)?;
            Ok(PolylineGraphic::new(item)?.with_id(id).create_entity(positions.clone(), None))
        })
        .collect()
}

/// One batched polyline primitive
///
/// Ground or plain is decided by the first option set's `on_ground`.
pub fn lines_as_primitive(
    positions_list: &[Vec<DVec3>],
    options: &OptionSet<PolylineOptions>,
) -> Result<PrimitiveDesc> {
    check_batch("line", positions_list.len(), options)?;
    let on_ground = options.first().and_then(|o| o.on_ground).unwrap_or(true);
    let instances = positions_list
        .iter()
        .enumerate()
        .map(|(index, positions)| {
            let (item, id) = options.item(index)?;
            Ok(PolylineGraphic::new(item)?.with_id(id).create_instance(positions.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PrimitiveDesc::Polylines { instances, on_ground })
}

// ===== POLYGONS =====

pub fn polygons_as_entities(
    positions_list: &[Vec<DVec3>],
    options: &OptionSet<PolygonOptions>,
) -> Result<Vec<EntityDesc>> {
    check_batch("polygon", positions_list.len(), options)?;
    positions_list
        .iter()
        .enumerate()
        .map(|(index, positions)| {
            let (item, id) = options.item(index)?;
            Ok(PolygonGraphic::new(item)?.with_id(id).create_entity(positions.clone(), None))
        })
        .collect()
}

/// Translucent ground fill primitive plus optional outline lines
///
/// The outline is built from the same positions with the outline color and
/// width, and carries the same ids as the fill. It is present when the first
/// option set's `outline` is unset or `Some(true)`.
pub fn polygons_as_primitives(
    positions_list: &[Vec<DVec3>],
    options: &OptionSet<PolygonOptions>,
) -> Result<PolygonPrimitives> {
    check_batch("polygon", positions_list.len(), options)?;
    let ids = (0..positions_list.len())
        .map(|index| options.item(index).map(|(_, id)| id))
        .collect::<Result<Vec<_>>>()?;

    let instances = positions_list
        .iter()
        .zip(&ids)
        .enumerate()
        .map(|(index, (positions, id))| {
            let (item, _) = options.item(index)?;
            Ok(PolygonGraphic::new(item)?.with_id(id.clone()).create_instance(positions.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    let fill = PrimitiveDesc::Polygons {
        instances,
        on_ground: true,
        translucent: true,
    };

    let wants_outline = options.first().map(|o| o.resolved_outline()).unwrap_or(false);
    let outline = if wants_outline {
        let line_options = options.map(|o| PolylineOptions {
            id: None,
            ids: Vec::new(),
            ..o.outline_line_options()
        });
        let line_ids: OptionSet<PolylineOptions> = match line_options {
            OptionSet::Shared(shared) => OptionSet::Shared(PolylineOptions { ids: ids.clone(), ..shared }),
            OptionSet::PerItem(items) => OptionSet::PerItem(
                items
                    .into_iter()
                    .zip(&ids)
                    .map(|(item, id)| PolylineOptions { id: Some(id.clone()), ..item })
                    .collect(),
            ),
        };
        Some(lines_as_primitive(positions_list, &line_ids)?)
    } else {
        None
    };

    Ok(PolygonPrimitives { fill, outline })
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
