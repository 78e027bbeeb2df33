use std::fs;
use std::path::Path;

use constants::grid::DEFAULT_CELL_LABEL;

use crate::engine::core::error::ViewerError;
use crate::engine::scene::coordinates::GridGeometry;
use crate::engine::scene::parser::{SceneGrid, parse_scene};

/// Read and parse the scene file, or synthesize a fully populated volume when it is absent.
pub fn load_scene(
    path: &Path,
    geometry: &GridGeometry,
    default_layers: usize,
) -> Result<SceneGrid, ViewerError> {
    if !path.exists() {
        println!(
            "→ No scene at {}, using a full {}x{}x{} volume",
            path.display(),
            default_layers,
            geometry.footprint,
            geometry.footprint
        );
        return Ok(SceneGrid::filled(
            default_layers,
            geometry.footprint,
            geometry.footprint,
            DEFAULT_CELL_LABEL,
        ));
    }

    let text = fs::read_to_string(path).map_err(|e| ViewerError::resource(path, e))?;
    let parsed = parse_scene(&text)?;

    for adjustment in &parsed.adjustments {
        eprintln!("Warning: {}: {adjustment}", path.display());
    }

    let grid = parsed.grid;
    if grid.rows() > geometry.footprint || grid.columns() > geometry.footprint {
        eprintln!(
            "Warning: scene is {}x{} cells, larger than the {}x{} board",
            grid.rows(),
            grid.columns(),
            geometry.footprint,
            geometry.footprint
        );
    }

    println!(
        "✓ Scene loaded: {} layers x {} rows x {} columns, {} occupied",
        grid.layers(),
        grid.rows(),
        grid.columns(),
        grid.occupied()
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::parser::{FormatError, VoxelIndex};
    use std::path::PathBuf;

    fn temp_scene(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "volume_viewer_{}_{name}.xyz",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_absent_file_synthesizes_full_volume() {
        let path = std::env::temp_dir().join("volume_viewer_scene_that_does_not_exist.xyz");
        let grid = load_scene(&path, &GridGeometry::default(), 8).unwrap();

        assert_eq!((grid.layers(), grid.rows(), grid.columns()), (8, 8, 8));
        assert!(grid.iter().all(|(_, cell)| !cell.is_blank()));
    }

    #[test]
    fn test_scene_file_is_parsed() {
        let path = temp_scene("parsed", "a,b\nc,d;\ne, \n ,h\n");
        let grid = load_scene(&path, &GridGeometry::default(), 8).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!((grid.layers(), grid.rows(), grid.columns()), (2, 2, 2));
        assert_eq!(grid.occupied(), 6);
        assert!(grid.get(VoxelIndex::new(1, 0, 1)).unwrap().is_blank());
    }

    #[test]
    fn test_empty_file_is_format_error() {
        let path = temp_scene("empty", "  \n");
        let result = load_scene(&path, &GridGeometry::default(), 8);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ViewerError::Format(FormatError::Empty))));
    }
}
