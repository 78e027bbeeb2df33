/// Rows and columns of the ground footprint
pub const GRID_SIZE: usize = 8;

/// Layer count of the synthesized volume when no scene file exists
pub const VOLUME_LAYERS: usize = 8;

/// Edge length of one footprint cell in world units
pub const CELL_SIZE: f32 = 1.0;

/// Height between two stacked layers
pub const VERTICAL_SPACING: f32 = 0.6;

/// Edge length of a billboard quad
pub const BILLBOARD_SIZE: f32 = 0.6;

/// Billboards float this far above their layer height
pub const BILLBOARD_LIFT: f32 = 0.3;

/// Vertical offset applied to the whole board and volume
pub const GROUND_OFFSET: f32 = -1.5;

/// Label written into every cell of the synthesized volume
pub const DEFAULT_CELL_LABEL: &str = "x";

/// Scene text delimiters
pub const LAYER_DELIMITER: char = ';';
pub const ROW_DELIMITER: char = '\n';
pub const CELL_DELIMITER: char = ',';
