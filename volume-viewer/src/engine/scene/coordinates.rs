/// Grid index to world space mapping
use bevy::prelude::*;
use serde::Deserialize;

use constants::grid::{
    BILLBOARD_LIFT, BILLBOARD_SIZE, CELL_SIZE, GRID_SIZE, GROUND_OFFSET, VERTICAL_SPACING,
};

use super::parser::VoxelIndex;

/// Position along one footprint axis, centring the `footprint`-cell span on the origin.
pub fn axis_position(index: usize, footprint: usize, cell_size: f32) -> f32 {
    let half = footprint as f32 * cell_size / 2.0;
    -half + cell_size / 2.0 + index as f32 * cell_size
}

/// Layer 0 sits on the base; layers stack upwards without vertical centring.
pub fn layer_height(layer: usize, vertical_spacing: f32) -> f32 {
    layer as f32 * vertical_spacing
}

/// Geometry shared by the checkerboard and the voxel volume.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridGeometry {
    pub footprint: usize,
    pub cell_size: f32,
    pub vertical_spacing: f32,
    pub billboard_size: f32,
    pub billboard_lift: f32,
    pub ground_offset: f32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            footprint: GRID_SIZE,
            cell_size: CELL_SIZE,
            vertical_spacing: VERTICAL_SPACING,
            billboard_size: BILLBOARD_SIZE,
            billboard_lift: BILLBOARD_LIFT,
            ground_offset: GROUND_OFFSET,
        }
    }
}

impl GridGeometry {
    /// Column drives x, row drives z, layer drives y.
    pub fn world_position(&self, index: VoxelIndex) -> Vec3 {
        Vec3::new(
            axis_position(index.column, self.footprint, self.cell_size),
            layer_height(index.layer, self.vertical_spacing),
            axis_position(index.row, self.footprint, self.cell_size),
        )
    }

    pub fn stack_height(&self, layers: usize) -> f32 {
        layers as f32 * self.vertical_spacing
    }

    /// Side length of the square ground footprint
    pub fn footprint_extent(&self) -> f32 {
        self.footprint as f32 * self.cell_size
    }
}
