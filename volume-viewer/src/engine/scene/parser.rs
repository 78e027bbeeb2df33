/// Flat scene text to voxel grid conversion
use std::fmt;
use std::str::FromStr;

use constants::grid::{CELL_DELIMITER, LAYER_DELIMITER, ROW_DELIMITER};

/// Position of one voxel inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelIndex {
    pub layer: usize,
    pub row: usize,
    pub column: usize,
}

impl VoxelIndex {
    pub const fn new(layer: usize, row: usize, column: usize) -> Self {
        Self { layer, row, column }
    }
}

/// Content of one voxel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Blank,
    Label(String),
}

impl Cell {
    fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            Cell::Blank
        } else {
            Cell::Label(token.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Cell::Blank => None,
            Cell::Label(label) => Some(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input held no text once whitespace was removed
    Empty,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Empty => write!(f, "scene text is empty, no layers to parse"),
        }
    }
}

impl std::error::Error for FormatError {}

/// A row or layer that was shorter than the grid extents and got padded with blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeAdjustment {
    PaddedLayer {
        layer: usize,
        found_rows: usize,
        rows: usize,
    },
    PaddedRow {
        layer: usize,
        row: usize,
        found_columns: usize,
        columns: usize,
    },
}

impl fmt::Display for ShapeAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeAdjustment::PaddedLayer {
                layer,
                found_rows,
                rows,
            } => write!(f, "layer {layer} has {found_rows} rows, padded to {rows}"),
            ShapeAdjustment::PaddedRow {
                layer,
                row,
                found_columns,
                columns,
            } => write!(
                f,
                "layer {layer} row {row} has {found_columns} cells, padded to {columns}"
            ),
        }
    }
}

/// Dense `[layer][row][column]` grid with extents fixed at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneGrid {
    layers: usize,
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl SceneGrid {
    /// Grid where every cell carries the same label.
    pub fn filled(layers: usize, rows: usize, columns: usize, label: &str) -> Self {
        Self {
            layers,
            rows,
            columns,
            cells: vec![Cell::Label(label.to_string()); layers * rows * columns],
        }
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of non-blank cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_blank()).count()
    }

    pub fn get(&self, index: VoxelIndex) -> Option<&Cell> {
        if index.layer >= self.layers || index.row >= self.rows || index.column >= self.columns {
            return None;
        }
        self.cells.get(self.offset(index))
    }

    /// All cells of one row, in column order.
    pub fn row(&self, layer: usize, row: usize) -> Option<&[Cell]> {
        if layer >= self.layers || row >= self.rows {
            return None;
        }
        let start = self.offset(VoxelIndex::new(layer, row, 0));
        Some(&self.cells[start..start + self.columns])
    }

    /// Cells in layer, row, column order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelIndex, &Cell)> {
        let (rows, columns) = (self.rows, self.columns);
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let per_layer = rows * columns;
            let index = VoxelIndex::new(i / per_layer, (i % per_layer) / columns, i % columns);
            (index, cell)
        })
    }

    /// Serialise back into scene text using the parser's delimiters.
    pub fn to_scene_text(&self) -> String {
        self.to_string()
    }

    fn offset(&self, index: VoxelIndex) -> usize {
        (index.layer * self.rows + index.row) * self.columns + index.column
    }
}

impl fmt::Display for SceneGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in 0..self.layers {
            if layer > 0 {
                write!(f, "{LAYER_DELIMITER}{ROW_DELIMITER}")?;
            }
            for row in 0..self.rows {
                if row > 0 {
                    write!(f, "{ROW_DELIMITER}")?;
                }
                let cells = self.row(layer, row).unwrap_or_default();
                for (column, cell) in cells.iter().enumerate() {
                    if column > 0 {
                        write!(f, "{CELL_DELIMITER}")?;
                    }
                    write!(f, "{}", cell.label().unwrap_or_default())?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for SceneGrid {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_scene(text).map(|parsed| parsed.grid)
    }
}

/// Parser output: the grid plus every padding applied to reach a uniform shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScene {
    pub grid: SceneGrid,
    pub adjustments: Vec<ShapeAdjustment>,
}

/// Parse `;`-separated layers of newline-separated rows of `,`-separated cells.
///
/// Extents come from a full pass over the tokenised text: the grid is as tall
/// as the tallest layer and as wide as the widest row. Shorter layers and rows
/// are padded with [`Cell::Blank`], so no token is ever dropped.
pub fn parse_scene(text: &str) -> Result<ParsedScene, FormatError> {
    if text.trim().is_empty() {
        return Err(FormatError::Empty);
    }

    let tokenised: Vec<Vec<Vec<Cell>>> = text
        .split(LAYER_DELIMITER)
        .map(|section| {
            section
                .trim()
                .split(ROW_DELIMITER)
                .map(|line| line.trim().split(CELL_DELIMITER).map(Cell::from_token).collect())
                .collect()
        })
        .collect();

    let layers = tokenised.len();
    let rows = tokenised.iter().map(Vec::len).max().unwrap_or(0);
    let columns = tokenised
        .iter()
        .flat_map(|layer| layer.iter().map(Vec::len))
        .max()
        .unwrap_or(0);

    let mut adjustments = Vec::new();
    let mut cells = Vec::with_capacity(layers * rows * columns);

    for (layer_index, mut layer) in tokenised.into_iter().enumerate() {
        if layer.len() < rows {
            adjustments.push(ShapeAdjustment::PaddedLayer {
                layer: layer_index,
                found_rows: layer.len(),
                rows,
            });
            layer.resize_with(rows, Vec::new);
        }

        for (row_index, mut row) in layer.into_iter().enumerate() {
            // Rows added by layer padding are not reported a second time
            if row.len() < columns && !row.is_empty() {
                adjustments.push(ShapeAdjustment::PaddedRow {
                    layer: layer_index,
                    row: row_index,
                    found_columns: row.len(),
                    columns,
                });
            }
            row.resize_with(columns, Cell::default);
            cells.extend(row);
        }
    }

    Ok(ParsedScene {
        grid: SceneGrid {
            layers,
            rows,
            columns,
            cells,
        },
        adjustments,
    })
}
