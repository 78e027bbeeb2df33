/// Checkerboard ground plane under the voxel volume
use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use constants::render_settings::{CHECKER_DARK, CHECKER_LIGHT};

use super::coordinates::{GridGeometry, axis_position};

#[derive(Component)]
pub struct GroundBoard;

/// One square of the board, in volume-root space on the y = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerTile {
    pub column: usize,
    pub row: usize,
    pub min_x: f32,
    pub min_z: f32,
    pub size: f32,
    /// Odd `column + row` tiles use the darker colour
    pub dark: bool,
}

/// Tiles share the voxel axis mapping, so each voxel column stands on a tile centre.
pub fn checker_tiles(geometry: &GridGeometry) -> Vec<CheckerTile> {
    let n = geometry.footprint;
    let size = geometry.cell_size;
    let mut tiles = Vec::with_capacity(n * n);

    for row in 0..n {
        for column in 0..n {
            tiles.push(CheckerTile {
                column,
                row,
                min_x: axis_position(column, n, size) - size / 2.0,
                min_z: axis_position(row, n, size) - size / 2.0,
                size,
                dark: (column + row) % 2 == 1,
            });
        }
    }

    tiles
}

/// Build a single vertex-coloured mesh holding every tile.
pub fn create_checkerboard_mesh(geometry: &GridGeometry) -> Mesh {
    let tiles = checker_tiles(geometry);
    let light = CHECKER_LIGHT.to_linear().to_f32_array();
    let dark = CHECKER_DARK.to_linear().to_f32_array();

    let mut positions = Vec::with_capacity(tiles.len() * 4);
    let mut colours = Vec::with_capacity(tiles.len() * 4);
    let mut indices = Vec::with_capacity(tiles.len() * 6);

    for tile in &tiles {
        let base = positions.len() as u32;
        let (x0, z0) = (tile.min_x, tile.min_z);
        let (x1, z1) = (tile.min_x + tile.size, tile.min_z + tile.size);

        positions.extend_from_slice(&[[x0, 0.0, z0], [x1, 0.0, z0], [x1, 0.0, z1], [x0, 0.0, z1]]);
        colours.extend_from_slice(&[if tile.dark { dark } else { light }; 4]);

        // Counter-clockwise seen from above
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

/// Spawn the board as a child of the volume root
pub fn spawn_ground_board(
    parent: &mut ChildSpawnerCommands,
    geometry: &GridGeometry,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let board_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    parent.spawn((
        Mesh3d(meshes.add(create_checkerboard_mesh(geometry))),
        MeshMaterial3d(board_material),
        Transform::IDENTITY,
        GroundBoard,
    ));
}
