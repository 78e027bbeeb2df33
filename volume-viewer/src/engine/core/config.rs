/// Startup configuration with optional JSON overrides
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use constants::grid::VOLUME_LAYERS;
use constants::path::{DRONE_IMAGE_PATH, SCENE_PATH, SKULL_IMAGE_PATH};
use constants::render_settings::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

use super::error::ViewerError;
use crate::engine::scene::billboard::{BillboardKind, BillboardRule, FrontRowRule, LabelRule};
use crate::engine::scene::coordinates::GridGeometry;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
        }
    }
}

/// How populated voxels pick their billboard.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillboardRuleConfig {
    #[default]
    FrontRow,
    Label {
        labels: HashMap<String, BillboardKind>,
        #[serde(default = "default_fallback")]
        fallback: BillboardKind,
    },
}

fn default_fallback() -> BillboardKind {
    BillboardKind::Drone
}

impl BillboardRuleConfig {
    pub fn build(&self) -> Box<dyn BillboardRule> {
        match self {
            BillboardRuleConfig::FrontRow => Box::new(FrontRowRule),
            BillboardRuleConfig::Label { labels, fallback } => {
                Box::new(LabelRule::new(labels.clone(), *fallback))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub scene_path: PathBuf,
    pub skull_image_path: PathBuf,
    pub drone_image_path: PathBuf,
    /// Layer count of the volume synthesized when the scene file is absent
    pub default_layers: usize,
    pub window: WindowSettings,
    pub geometry: GridGeometry,
    pub billboard_rule: BillboardRuleConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scene_path: PathBuf::from(SCENE_PATH),
            skull_image_path: PathBuf::from(SKULL_IMAGE_PATH),
            drone_image_path: PathBuf::from(DRONE_IMAGE_PATH),
            default_layers: VOLUME_LAYERS,
            window: WindowSettings::default(),
            geometry: GridGeometry::default(),
            billboard_rule: BillboardRuleConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Read overrides from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|e| ViewerError::resource(path, e))?;
        let config = Self::from_json(&text)?;
        println!("✓ Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ViewerError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ViewerError::Configuration(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ViewerError::Configuration(format!(
                "degenerate viewport {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.geometry.footprint == 0 {
            return Err(ViewerError::Configuration(
                "footprint must hold at least one cell".to_string(),
            ));
        }
        if self.default_layers == 0 {
            return Err(ViewerError::Configuration(
                "default volume needs at least one layer".to_string(),
            ));
        }
        let lengths = [
            ("cell_size", self.geometry.cell_size),
            ("vertical_spacing", self.geometry.vertical_spacing),
            ("billboard_size", self.geometry.billboard_size),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(ViewerError::Configuration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
