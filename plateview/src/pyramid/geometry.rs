//! Pure size queries over a pyramid.

use std::fmt;

use thiserror::Error;

use super::PyramidSource;

/// Upper bound on the number of pyramid levels.
///
/// Level sizes are computed by shifting, so anything beyond 32 halvings of a
/// `u32` dimension is meaningless.
pub const MAX_LEVELS: u32 = 32;

/// A (height, width) pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of pixel rows
    pub height: u32,
    /// Number of pixel columns
    pub width: u32,
}

impl Shape {
    /// Create a shape from height and width.
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// True if height and width are equal.
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.height, self.width)
    }
}

/// Errors raised by geometry queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Zoom outside `[-(num_levels - 1), 0]`
    #[error("Invalid level: zoom {zoom} (must be between {min_zoom} and 0)")]
    InvalidLevel { zoom: f64, min_zoom: i32 },

    /// The source describes a pyramid this crate cannot address
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}

/// Level sizes and chunking of a multiscale image.
///
/// Built once per source and copied freely; it never changes after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidGeometry {
    num_levels: u32,
    base: Shape,
    chunk: Shape,
}

impl PyramidGeometry {
    /// Create a geometry, validating level count and shapes.
    ///
    /// # Errors
    ///
    /// `UnsupportedGeometry` when `num_levels` is zero or above
    /// [`MAX_LEVELS`], or when the base or chunk shape has a zero dimension.
    pub fn new(num_levels: u32, base: Shape, chunk: Shape) -> Result<Self, GeometryError> {
        if num_levels == 0 || num_levels > MAX_LEVELS {
            return Err(GeometryError::UnsupportedGeometry(format!(
                "level count {} outside 1..={}",
                num_levels, MAX_LEVELS
            )));
        }
        if base.is_empty() {
            return Err(GeometryError::UnsupportedGeometry(format!(
                "empty base shape {}",
                base
            )));
        }
        if chunk.is_empty() {
            return Err(GeometryError::UnsupportedGeometry(format!(
                "empty chunk shape {}",
                chunk
            )));
        }

        Ok(Self {
            num_levels,
            base,
            chunk,
        })
    }

    /// Read the geometry advertised by a source.
    pub fn of<S: PyramidSource + ?Sized>(source: &S) -> Result<Self, GeometryError> {
        Self::new(source.num_levels(), source.base_shape(), source.chunk_shape())
    }

    /// Number of levels, including the base.
    pub fn num_levels(&self) -> u32 {
        self.num_levels
    }

    /// Shape of the finest level.
    pub fn base_shape(&self) -> Shape {
        self.base
    }

    /// Chunk shape, identical at every level.
    pub fn chunk_size(&self) -> Shape {
        self.chunk
    }

    /// Most negative zoom that still maps to a level.
    pub fn min_zoom(&self) -> i32 {
        -((self.num_levels - 1) as i32)
    }

    /// Zoom of the base level. Always zero.
    pub fn max_zoom(&self) -> i32 {
        0
    }

    /// Map a zoom value to a level index.
    ///
    /// The level index is `-zoom` rounded toward zero, so `-2.7` reads from
    /// level 2.
    pub fn level_index(&self, zoom: f64) -> Result<u32, GeometryError> {
        let level = (-zoom).trunc();
        if !level.is_finite() || level < 0.0 || level > f64::from(self.num_levels - 1) {
            return Err(GeometryError::InvalidLevel {
                zoom,
                min_zoom: self.min_zoom(),
            });
        }
        Ok(level as u32)
    }

    /// Raster size at a zoom.
    pub fn raster_size(&self, zoom: f64) -> Result<Shape, GeometryError> {
        let level = self.level_index(zoom)?;
        Ok(self.level_shape(level))
    }

    /// Raster size at a level index. The caller guarantees the index is valid.
    pub(crate) fn level_shape(&self, level: u32) -> Shape {
        level_shape(self.base, level)
    }

    /// Number of chunk rows and columns at a zoom.
    pub fn chunk_grid(&self, zoom: f64) -> Result<(u32, u32), GeometryError> {
        let raster = self.raster_size(zoom)?;
        Ok((
            raster.height.div_ceil(self.chunk.height),
            raster.width.div_ceil(self.chunk.width),
        ))
    }

    /// Whether a chunk address exists at a zoom.
    pub fn contains_chunk(&self, zoom: f64, row: i64, col: i64) -> Result<bool, GeometryError> {
        let (rows, cols) = self.chunk_grid(zoom)?;
        Ok((0..i64::from(rows)).contains(&row) && (0..i64::from(cols)).contains(&col))
    }
}

/// Shape of `level` for a pyramid whose base is `base`.
pub(crate) fn level_shape(base: Shape, level: u32) -> Shape {
    Shape::new(
        halve_ceil(base.height, level),
        halve_ceil(base.width, level),
    )
}

/// `ceil(value / 2^level)`
fn halve_ceil(value: u32, level: u32) -> u32 {
    let divisor = 1u64 << level;
    (u64::from(value).div_ceil(divisor)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PyramidGeometry {
        PyramidGeometry::new(5, Shape::new(1024, 2048), Shape::new(256, 256)).unwrap()
    }

    #[test]
    fn test_zoom_bounds() {
        let geom = geometry();
        assert_eq!(geom.min_zoom(), -4);
        assert_eq!(geom.max_zoom(), 0);
    }

    #[test]
    fn test_base_raster_at_zoom_zero() {
        assert_eq!(geometry().raster_size(0.0).unwrap(), Shape::new(1024, 2048));
    }

    #[test]
    fn test_raster_halves_per_level() {
        let geom = geometry();
        assert_eq!(geom.raster_size(-1.0).unwrap(), Shape::new(512, 1024));
        assert_eq!(geom.raster_size(-4.0).unwrap(), Shape::new(64, 128));
    }

    #[test]
    fn test_odd_sizes_round_up() {
        let geom = PyramidGeometry::new(3, Shape::new(1001, 3), Shape::new(64, 64)).unwrap();
        assert_eq!(geom.raster_size(-1.0).unwrap(), Shape::new(501, 2));
        assert_eq!(geom.raster_size(-2.0).unwrap(), Shape::new(251, 1));
    }

    #[test]
    fn test_raster_monotonic_toward_zero() {
        let geom = geometry();
        let mut previous = geom.raster_size(f64::from(geom.min_zoom())).unwrap();
        for zoom in (geom.min_zoom() + 1)..=0 {
            let current = geom.raster_size(f64::from(zoom)).unwrap();
            assert!(current.height >= previous.height);
            assert!(current.width >= previous.width);
            previous = current;
        }
    }

    #[test]
    fn test_fractional_zoom_truncates_toward_zero() {
        let geom = geometry();
        assert_eq!(geom.level_index(-2.7).unwrap(), 2);
        assert_eq!(geom.level_index(-0.4).unwrap(), 0);
    }

    #[test]
    fn test_invalid_level_below_min() {
        let result = geometry().raster_size(-5.0);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidLevel { min_zoom: -4, .. })
        ));
    }

    #[test]
    fn test_invalid_level_positive_zoom() {
        assert!(geometry().level_index(1.0).is_err());
        assert!(geometry().level_index(f64::NAN).is_err());
    }

    #[test]
    fn test_chunk_grid() {
        let geom = geometry();
        assert_eq!(geom.chunk_grid(0.0).unwrap(), (4, 8));
        assert_eq!(geom.chunk_grid(-4.0).unwrap(), (1, 1));
    }

    #[test]
    fn test_contains_chunk() {
        let geom = geometry();
        assert!(geom.contains_chunk(0.0, 3, 7).unwrap());
        assert!(!geom.contains_chunk(0.0, 4, 0).unwrap());
        assert!(!geom.contains_chunk(0.0, 0, -1).unwrap());
    }

    #[test]
    fn test_rejects_zero_levels() {
        let result = PyramidGeometry::new(0, Shape::new(10, 10), Shape::new(4, 4));
        assert!(matches!(
            result,
            Err(GeometryError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn test_rejects_empty_shapes() {
        assert!(PyramidGeometry::new(1, Shape::new(0, 10), Shape::new(4, 4)).is_err());
        assert!(PyramidGeometry::new(1, Shape::new(10, 10), Shape::new(4, 0)).is_err());
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::new(3, 4).to_string(), "3×4");
    }
}
