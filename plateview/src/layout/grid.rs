//! Grid offset planning.

use std::sync::Arc;

use super::{CellId, LayoutError};
use crate::pyramid::Shape;

/// Shape of a plate: dimensions, cell size and spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    rows: u32,
    columns: u32,
    cell_shape: Shape,
    spacer: f64,
}

impl GridSpec {
    /// Create a grid specification.
    ///
    /// # Errors
    ///
    /// `InvalidGrid` when rows or columns are zero, or the spacer is
    /// negative or not finite.
    pub fn new(rows: u32, columns: u32, cell_shape: Shape, spacer: f64) -> Result<Self, LayoutError> {
        if rows == 0 || columns == 0 {
            return Err(LayoutError::InvalidGrid(format!(
                "{} rows × {} columns",
                rows, columns
            )));
        }
        if !spacer.is_finite() || spacer < 0.0 {
            return Err(LayoutError::InvalidGrid(format!("spacer {}", spacer)));
        }
        Ok(Self {
            rows,
            columns,
            cell_shape,
            spacer,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_shape(&self) -> Shape {
        self.cell_shape
    }

    pub fn spacer(&self) -> f64 {
        self.spacer
    }

    /// Number of wells, `rows × columns`.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// One placed well.
#[derive(Debug)]
pub struct GridCell<S> {
    pub row: u32,
    pub col: u32,
    /// Translation `[x, y]` in scene units
    pub offset: [f64; 2],
    pub source: Arc<S>,
}

impl<S> GridCell<S> {
    /// Structured identifier of this cell under a layer id.
    pub fn id(&self, base_id: &str) -> CellId {
        CellId::new(base_id, self.row, self.col)
    }
}

impl<S> Clone for GridCell<S> {
    fn clone(&self) -> Self {
        Self {
            row: self.row,
            col: self.col,
            offset: self.offset,
            source: Arc::clone(&self.source),
        }
    }
}

/// Computes per-cell translations for a [`GridSpec`].
///
/// ```text
/// top  = -(rows    × (cell_height + spacer)) / 2
/// left = -(columns × (cell_width  + spacer)) / 2
/// offset(r, c) = (left + c × (cell_width + spacer), top + r × (cell_height + spacer))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayoutPlanner {
    spec: GridSpec,
}

impl GridLayoutPlanner {
    pub fn new(spec: GridSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Distance between neighbouring cell origins, `(x, y)`.
    pub fn pitch(&self) -> (f64, f64) {
        let cell = self.spec.cell_shape;
        (
            f64::from(cell.width) + self.spec.spacer,
            f64::from(cell.height) + self.spec.spacer,
        )
    }

    /// Top-left corner of cell (0, 0), `(left, top)`.
    pub fn origin(&self) -> (f64, f64) {
        let (pitch_x, pitch_y) = self.pitch();
        (
            -(f64::from(self.spec.columns) * pitch_x) / 2.0,
            -(f64::from(self.spec.rows) * pitch_y) / 2.0,
        )
    }

    /// Translation of one cell.
    pub fn offset(&self, row: u32, col: u32) -> [f64; 2] {
        let (left, top) = self.origin();
        let (pitch_x, pitch_y) = self.pitch();
        [
            left + f64::from(col) * pitch_x,
            top + f64::from(row) * pitch_y,
        ]
    }

    /// Place `rows × columns` sources given in row-major order.
    ///
    /// # Errors
    ///
    /// `LayoutMismatch` when the number of sources is not exactly
    /// `rows × columns`. No cells are produced in that case.
    pub fn plan<S>(&self, sources: &[Arc<S>]) -> Result<Vec<GridCell<S>>, LayoutError> {
        let expected = self.spec.cell_count();
        if sources.len() != expected {
            return Err(LayoutError::LayoutMismatch {
                expected,
                actual: sources.len(),
            });
        }

        let columns = self.spec.columns as usize;
        Ok(sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let row = (index / columns) as u32;
                let col = (index % columns) as u32;
                GridCell {
                    row,
                    col,
                    offset: self.offset(row, col),
                    source: Arc::clone(source),
                }
            })
            .collect())
    }
}
