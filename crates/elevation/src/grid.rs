use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Something that can report terrain elevation at a planar location.
///
/// `None` means the location is outside the surface; callers decide how to
/// degrade (the profile pipeline substitutes 0.0).
pub trait ElevationSampler {
    fn elevation_at(&self, x: f64, y: f64) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    Empty,
    NonPositiveCellSize(f64),
    DimensionMismatch { expected: usize, actual: usize },
    RaggedRows { row: usize, expected: usize, actual: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::Empty => write!(f, "height grid needs at least one node"),
            GridError::NonPositiveCellSize(s) => {
                write!(f, "cell size must be positive, got {s}")
            }
            GridError::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} height values, got {actual}")
            }
            GridError::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has {actual} values, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Serialized description of a grid surface.
///
/// `rows` are ordered from the grid origin outward along +y; each row runs
/// along +x. This mirrors how surfaces arrive from the scene package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceDescriptor {
    pub title: String,
    pub origin: [f64; 2],
    pub cell_size: f64,
    pub rows: Vec<Vec<f64>>,
}

impl SurfaceDescriptor {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Row-major sampled elevation surface with bilinear interpolation.
///
/// Grid nodes sit at `origin + (col, row) * cell_size` in planar map units
/// (meters). Locations between nodes interpolate; locations outside the node
/// extent sample to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    origin: Vec2,
    cell_size: f64,
    columns: usize,
    rows: usize,
    heights: Vec<f64>,
}

impl HeightGrid {
    pub fn new(
        origin: Vec2,
        cell_size: f64,
        columns: usize,
        heights: Vec<f64>,
    ) -> Result<Self, GridError> {
        if cell_size <= 0.0 {
            return Err(GridError::NonPositiveCellSize(cell_size));
        }
        if columns == 0 || heights.is_empty() {
            return Err(GridError::Empty);
        }
        if heights.len() % columns != 0 {
            return Err(GridError::DimensionMismatch {
                expected: heights.len().div_ceil(columns) * columns,
                actual: heights.len(),
            });
        }
        let rows = heights.len() / columns;
        Ok(Self {
            origin,
            cell_size,
            columns,
            rows,
            heights,
        })
    }

    pub fn from_descriptor(desc: &SurfaceDescriptor) -> Result<Self, GridError> {
        let columns = desc.rows.first().map(Vec::len).unwrap_or(0);
        let mut heights = Vec::with_capacity(desc.rows.len() * columns);
        for (i, row) in desc.rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: columns,
                    actual: row.len(),
                });
            }
            heights.extend_from_slice(row);
        }
        Self::new(
            Vec2::new(desc.origin[0], desc.origin[1]),
            desc.cell_size,
            columns,
            heights,
        )
    }

    /// Builds a grid by evaluating `f` at every node's planar location.
    pub fn from_fn(
        origin: Vec2,
        cell_size: f64,
        columns: usize,
        rows: usize,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, GridError> {
        let mut heights = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                let x = origin.x + col as f64 * cell_size;
                let y = origin.y + row as f64 * cell_size;
                heights.push(f(x, y));
            }
        }
        Self::new(origin, cell_size, columns, heights)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn node(&self, col: usize, row: usize) -> f64 {
        self.heights[row * self.columns + col]
    }
}

impl ElevationSampler for HeightGrid {
    fn elevation_at(&self, x: f64, y: f64) -> Option<f64> {
        let gx = (x - self.origin.x) / self.cell_size;
        let gy = (y - self.origin.y) / self.cell_size;

        let max_x = (self.columns - 1) as f64;
        let max_y = (self.rows - 1) as f64;
        if gx < 0.0 || gy < 0.0 || gx > max_x || gy > max_y {
            return None;
        }

        let col0 = (gx.floor() as usize).min(self.columns - 1);
        let row0 = (gy.floor() as usize).min(self.rows - 1);
        let col1 = (col0 + 1).min(self.columns - 1);
        let row1 = (row0 + 1).min(self.rows - 1);
        let fx = gx - col0 as f64;
        let fy = gy - row0 as f64;

        let h00 = self.node(col0, row0);
        let h10 = self.node(col1, row0);
        let h01 = self.node(col0, row1);
        let h11 = self.node(col1, row1);

        let bottom = h00 + (h10 - h00) * fx;
        let top = h01 + (h11 - h01) * fx;
        Some(bottom + (top - bottom) * fy)
    }
}
