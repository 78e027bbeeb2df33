use std::path::Path;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use constants::render_settings::{CLEAR_COLOUR, LIGHT_INTENSITY, LIGHT_POSITION, LIGHT_RANGE};

// Crate engine modules
use crate::engine::camera::orbit_camera::{
    apply_viewport_aspect, spawn_viewer_camera, sync_camera_transform,
};
use crate::engine::core::config::ViewerConfig;
use crate::engine::core::error::ViewerError;
use crate::engine::core::session::ViewerSession;
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::keymap::handle_viewer_keys;
use crate::engine::loading::scene_loader::load_scene;
use crate::engine::loading::texture_loader::{BillboardImages, load_billboard_images};
use crate::engine::scene::volume::{BillboardMaterials, spawn_volume};
use crate::engine::systems::status_overlay::{spawn_status_overlay, status_text_update_system};

/// Everything loaded before the window opens.
pub struct ViewerStartup {
    pub config: ViewerConfig,
    pub session: ViewerSession,
    pub images: BillboardImages,
}

/// Load configuration, scene and images. Any error here is fatal.
pub fn prepare_startup(config_path: &Path) -> Result<ViewerStartup, ViewerError> {
    println!("=== VOXEL VOLUME VIEWER ===");

    let config = ViewerConfig::load(config_path)?;
    let grid = load_scene(&config.scene_path, &config.geometry, config.default_layers)?;
    let images = load_billboard_images(&config.skull_image_path, &config.drone_image_path)?;

    let rule = config.billboard_rule.build();
    let session = ViewerSession::new(&grid, config.geometry, rule.as_ref());
    println!("✓ Resolved {} billboards", session.placements().len());

    Ok(ViewerStartup {
        config,
        session,
        images,
    })
}

pub fn create_app(startup: ViewerStartup) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&startup.config))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(CLEAR_COLOUR))
        .insert_resource(startup.session)
        .insert_resource(startup.images)
        .add_systems(Startup, setup)
        // Poll input, apply it, then place the camera for this frame
        .add_systems(
            Update,
            (
                handle_viewer_keys,
                apply_viewport_aspect,
                sync_camera_transform,
                status_text_update_system,
            )
                .chain(),
        );

    app
}

fn setup(
    mut commands: Commands,
    session: Res<ViewerSession>,
    billboard_images: Res<BillboardImages>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let billboard_materials =
        BillboardMaterials::new(&billboard_images, &mut images, &mut materials);
    commands.remove_resource::<BillboardImages>();

    spawn_lighting(&mut commands);
    spawn_viewer_camera(&mut commands, &session);
    spawn_volume(
        &mut commands,
        &session,
        &billboard_materials,
        &mut meshes,
        &mut materials,
    );
    spawn_status_overlay(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        PointLight {
            intensity: LIGHT_INTENSITY,
            range: LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(LIGHT_POSITION)),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
}

fn create_default_plugins(config: &ViewerConfig) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(&config.window)),
        ..default()
    };

    DefaultPlugins.set(window_config)
}
