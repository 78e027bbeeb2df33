/// Billboard classification and load-time placement
use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use super::coordinates::GridGeometry;
use super::parser::{SceneGrid, VoxelIndex};

/// Which of the two billboard images a voxel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillboardKind {
    Skull,
    Drone,
}

/// Maps a populated voxel to the billboard drawn for it.
pub trait BillboardRule: Send + Sync {
    fn classify(&self, index: VoxelIndex, label: &str) -> BillboardKind;
}

/// The front row of every layer shows skulls, everything behind it drones.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontRowRule;

impl BillboardRule for FrontRowRule {
    fn classify(&self, index: VoxelIndex, _label: &str) -> BillboardKind {
        if index.row == 0 {
            BillboardKind::Skull
        } else {
            BillboardKind::Drone
        }
    }
}

/// Label lookup table. Labels missing from the table use `fallback`.
#[derive(Debug, Clone)]
pub struct LabelRule {
    kinds: HashMap<String, BillboardKind>,
    fallback: BillboardKind,
}

impl LabelRule {
    pub fn new(kinds: HashMap<String, BillboardKind>, fallback: BillboardKind) -> Self {
        Self { kinds, fallback }
    }
}

impl BillboardRule for LabelRule {
    fn classify(&self, _index: VoxelIndex, label: &str) -> BillboardKind {
        self.kinds.get(label).copied().unwrap_or(self.fallback)
    }
}

/// One billboard to draw, resolved once when the scene is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardPlacement {
    pub index: VoxelIndex,
    /// Quad centre relative to the volume root, lift included
    pub position: Vec3,
    pub kind: BillboardKind,
}

/// Walk the grid once and emit a placement for every non-blank cell.
pub fn resolve_placements(
    grid: &SceneGrid,
    geometry: &GridGeometry,
    rule: &dyn BillboardRule,
) -> Vec<BillboardPlacement> {
    grid.iter()
        .filter_map(|(index, cell)| {
            let label = cell.label()?;
            Some(BillboardPlacement {
                index,
                position: geometry.world_position(index) + Vec3::Y * geometry.billboard_lift,
                kind: rule.classify(index, label),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_row_rule_ignores_label() {
        let rule = FrontRowRule;
        assert_eq!(rule.classify(VoxelIndex::new(3, 0, 5), "drone"), BillboardKind::Skull);
        assert_eq!(rule.classify(VoxelIndex::new(0, 1, 0), "skull"), BillboardKind::Drone);
    }

    #[test]
    fn test_label_rule_falls_back_for_unknown_labels() {
        let rule = LabelRule::new(
            HashMap::from([("s".to_string(), BillboardKind::Skull)]),
            BillboardKind::Drone,
        );
        assert_eq!(rule.classify(VoxelIndex::new(0, 4, 0), "s"), BillboardKind::Skull);
        assert_eq!(rule.classify(VoxelIndex::new(0, 0, 0), "??"), BillboardKind::Drone);
    }

    #[test]
    fn test_placements_skip_blank_cells() {
        let grid: SceneGrid = "a, \n ,b;c,d\n,".parse().unwrap();
        let placements = resolve_placements(&grid, &GridGeometry::default(), &FrontRowRule);

        let indices: Vec<VoxelIndex> = placements.iter().map(|p| p.index).collect();
        assert_eq!(
            indices,
            vec![
                VoxelIndex::new(0, 0, 0),
                VoxelIndex::new(0, 1, 1),
                VoxelIndex::new(1, 0, 0),
                VoxelIndex::new(1, 0, 1),
            ]
        );
        assert_eq!(placements[0].kind, BillboardKind::Skull);
        assert_eq!(placements[1].kind, BillboardKind::Drone);
    }

    #[test]
    fn test_placement_includes_lift() {
        let geometry = GridGeometry::default();
        let grid: SceneGrid = ",;,\n,x".parse().unwrap();
        let placements = resolve_placements(&grid, &geometry, &FrontRowRule);

        assert_eq!(placements.len(), 1);
        let expected = geometry.world_position(VoxelIndex::new(1, 1, 1)).y + geometry.billboard_lift;
        assert!((placements[0].position.y - expected).abs() < 1e-5);
    }
}
