//! Structured identifiers for grid cells.

use std::fmt;

/// Marker separating the base id from the row and column in a cell id.
pub const GRID_MARKER: &str = "plate";

/// Identity of one cell in a plate layer.
///
/// Rendered as `"{base_id}-plate-{row}-{col}"`.
///
/// ```
/// use plateview::layout::CellId;
///
/// let id = CellId::new("img1", 2, 3);
/// assert_eq!(id.to_string(), "img1-plate-2-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellId {
    pub base_id: String,
    pub row: u32,
    pub col: u32,
}

impl CellId {
    pub fn new(base_id: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            base_id: base_id.into(),
            row,
            col,
        }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.base_id, GRID_MARKER, self.row, self.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        assert_eq!(CellId::new("layer-4", 0, 11).to_string(), "layer-4-plate-0-11");
    }
}
