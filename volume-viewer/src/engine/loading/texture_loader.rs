use std::path::Path;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::engine::core::error::ViewerError;
use crate::engine::scene::billboard::BillboardKind;

/// Decoded billboard images, waiting to be handed to the asset store at startup.
#[derive(Resource, Clone)]
pub struct BillboardImages {
    pub skull: Image,
    pub drone: Image,
}

impl BillboardImages {
    pub fn get(&self, kind: BillboardKind) -> &Image {
        match kind {
            BillboardKind::Skull => &self.skull,
            BillboardKind::Drone => &self.drone,
        }
    }
}

/// Decode any supported image file into an sRGB RGBA8 texture.
pub fn decode_billboard_image(path: &Path) -> Result<Image, ViewerError> {
    let rgba = image::open(path)
        .map_err(|e| ViewerError::resource(path, e))?
        .into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    ))
}

/// Both images must decode; either failure aborts startup.
pub fn load_billboard_images(skull: &Path, drone: &Path) -> Result<BillboardImages, ViewerError> {
    let images = BillboardImages {
        skull: decode_billboard_image(skull)?,
        drone: decode_billboard_image(drone)?,
    };

    println!("✓ Billboard images decoded:");
    println!("  Skull: {} ({}x{})", skull.display(), images.skull.width(), images.skull.height());
    println!("  Drone: {} ({}x{})", drone.display(), images.drone.width(), images.drone.height());

    Ok(images)
}
