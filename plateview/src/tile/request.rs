//! Tile request type.

use std::fmt;

/// A tile the renderer wants to draw.
///
/// `x` and `y` index the tile grid of the level selected by `zoom`. They are
/// signed because the renderer may ask for tiles left of or above the image
/// when the viewport extends past it.
///
/// # Example
///
/// ```
/// use plateview::tile::TileRequest;
///
/// let request = TileRequest::new(3, 1, -2);
/// assert_eq!(request.x(), 3);
/// assert_eq!(request.y(), 1);
/// assert_eq!(request.zoom(), -2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRequest {
    x: i64,
    y: i64,
    zoom: i32,
}

impl TileRequest {
    /// Create a new tile request.
    ///
    /// # Arguments
    ///
    /// * `x` - Tile column
    /// * `y` - Tile row
    /// * `zoom` - Non-positive zoom; 0 is the base level
    pub fn new(x: i64, y: i64, zoom: i32) -> Self {
        Self { x, y, zoom }
    }

    /// Tile column.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Tile row.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Zoom level.
    pub fn zoom(&self) -> i32 {
        self.zoom
    }
}

impl fmt::Display for TileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile ({}, {}) @ z{}", self.x, self.y, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let request = TileRequest::new(-1, 7, -3);
        assert_eq!(request.x(), -1);
        assert_eq!(request.y(), 7);
        assert_eq!(request.zoom(), -3);
    }

    #[test]
    fn test_hash_dedupes_identical_requests() {
        let mut set = HashSet::new();
        set.insert(TileRequest::new(1, 2, 0));
        set.insert(TileRequest::new(1, 2, 0));
        set.insert(TileRequest::new(1, 2, -1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(TileRequest::new(4, 5, -1).to_string(), "tile (4, 5) @ z-1");
    }
}
