//! Billboard entities for every populated voxel
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::billboard::{BillboardKind, BillboardPlacement};
use super::ground::spawn_ground_board;
use crate::engine::core::session::ViewerSession;
use crate::engine::loading::texture_loader::BillboardImages;

/// Parent of the board and the billboards, shifted down by the ground offset.
#[derive(Component)]
pub struct VolumeRoot;

#[derive(Component, Debug, Clone, Copy)]
pub struct Billboard {
    pub kind: BillboardKind,
}

/// One material per billboard kind, shared by every quad of that kind.
pub struct BillboardMaterials {
    skull: Handle<StandardMaterial>,
    drone: Handle<StandardMaterial>,
}

impl BillboardMaterials {
    pub fn new(
        billboard_images: &BillboardImages,
        images: &mut Assets<Image>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        let mut material_for = |kind: BillboardKind| {
            let texture = images.add(billboard_images.get(kind).clone());
            materials.add(StandardMaterial {
                base_color_texture: Some(texture),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            })
        };

        Self {
            skull: material_for(BillboardKind::Skull),
            drone: material_for(BillboardKind::Drone),
        }
    }

    pub fn get(&self, kind: BillboardKind) -> Handle<StandardMaterial> {
        match kind {
            BillboardKind::Skull => self.skull.clone(),
            BillboardKind::Drone => self.drone.clone(),
        }
    }
}

/// Spawn the volume root with the board and one quad per placement
pub fn spawn_volume(
    commands: &mut Commands,
    session: &ViewerSession,
    billboard_materials: &BillboardMaterials,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let geometry = *session.geometry();
    let quad = meshes.add(Rectangle::new(geometry.billboard_size, geometry.billboard_size));

    commands
        .spawn((
            Transform::from_xyz(0.0, geometry.ground_offset, 0.0),
            Visibility::default(),
            VolumeRoot,
        ))
        .with_children(|parent| {
            spawn_ground_board(parent, &geometry, meshes, materials);
            for placement in session.placements() {
                spawn_billboard(parent, placement, quad.clone(), billboard_materials);
            }
        });

    info!("Spawned {} billboards", session.placements().len());
}

/// Quads keep the mesh's fixed +Z facing; they do not turn towards the camera.
fn spawn_billboard(
    parent: &mut ChildSpawnerCommands,
    placement: &BillboardPlacement,
    quad: Handle<Mesh>,
    billboard_materials: &BillboardMaterials,
) {
    parent.spawn((
        Mesh3d(quad),
        MeshMaterial3d(billboard_materials.get(placement.kind)),
        Transform::from_translation(placement.position),
        Billboard {
            kind: placement.kind,
        },
    ));
}
