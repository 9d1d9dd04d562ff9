//! In-memory pyramid source.

use super::geometry::level_shape;
use super::{ChunkError, GeometryError, PyramidGeometry, PyramidSource, RawChunk, Shape};

/// A pyramid held entirely in memory.
///
/// Each level is a full interleaved raster. Chunks are cut on request and
/// padded with zeros at the right and bottom edges, the same way chunked
/// array stores pad partial edge chunks. Used by the CLI `probe` command and
/// throughout the tests.
///
/// # Example
///
/// ```
/// use plateview::pyramid::{InMemoryPyramid, PyramidSource, Shape};
///
/// let source = InMemoryPyramid::gradient("demo", 3, Shape::new(512, 512), Shape::new(256, 256)).unwrap();
/// assert_eq!(source.num_levels(), 3);
/// assert_eq!(source.chunk_shape(), Shape::new(256, 256));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryPyramid {
    id: String,
    base: Shape,
    chunk: Shape,
    channels: u32,
    levels: Vec<Option<Vec<u8>>>,
}

impl InMemoryPyramid {
    /// Build a pyramid by evaluating `sample(level, x, y, channel)` for every
    /// pixel of every level.
    ///
    /// Level shapes follow [`PyramidGeometry`]: each level halves the
    /// previous one, rounding up.
    ///
    /// # Errors
    ///
    /// `UnsupportedGeometry` when the geometry is rejected by
    /// [`PyramidGeometry::new`] or the base raster does not fit in memory.
    /// Nothing is sampled in that case.
    pub fn from_fn<F>(
        id: impl Into<String>,
        num_levels: u32,
        base: Shape,
        chunk: Shape,
        channels: u32,
        sample: F,
    ) -> Result<Self, GeometryError>
    where
        F: Fn(u32, u32, u32, u32) -> u8,
    {
        PyramidGeometry::new(num_levels, base, chunk)?;
        raster_len(base, channels)?;

        let levels: Vec<Option<Vec<u8>>> = (0..num_levels)
            .map(|level| -> Result<Option<Vec<u8>>, GeometryError> {
                let shape = level_shape(base, level);
                let mut raster = Vec::with_capacity(raster_len(shape, channels)?);
                for y in 0..shape.height {
                    for x in 0..shape.width {
                        for c in 0..channels {
                            raster.push(sample(level, x, y, c));
                        }
                    }
                }
                Ok(Some(raster))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            id: id.into(),
            base,
            chunk,
            channels,
            levels,
        })
    }

    /// An RGBA pyramid with a horizontal red ramp and a vertical green ramp.
    ///
    /// # Errors
    ///
    /// Same as [`InMemoryPyramid::from_fn`].
    pub fn gradient(
        id: impl Into<String>,
        num_levels: u32,
        base: Shape,
        chunk: Shape,
    ) -> Result<Self, GeometryError> {
        Self::from_fn(id, num_levels, base, chunk, 4, |level, x, y, c| {
            let full_x = u64::from(x) << level;
            let full_y = u64::from(y) << level;
            match c {
                0 => (full_x * 255 / u64::from(base.width.max(1))) as u8,
                1 => (full_y * 255 / u64::from(base.height.max(1))) as u8,
                2 => (level * 40).min(255) as u8,
                _ => 255,
            }
        })
    }

    /// Drop the data of one level so every read from it reports `Missing`.
    pub fn without_level(mut self, level: u32) -> Self {
        if let Some(slot) = self.levels.get_mut(level as usize) {
            *slot = None;
        }
        self
    }

    /// Samples per pixel.
    pub fn channels(&self) -> u32 {
        self.channels
    }

    fn cut_chunk(&self, level: u32, tile_y: u32, tile_x: u32) -> Result<RawChunk, ChunkError> {
        let missing = ChunkError::Missing {
            level,
            row: tile_y,
            col: tile_x,
        };
        let raster = match self.levels.get(level as usize) {
            Some(Some(raster)) => raster,
            _ => return Err(missing),
        };

        let shape = level_shape(self.base, level);

        let origin_y = u64::from(tile_y) * u64::from(self.chunk.height);
        let origin_x = u64::from(tile_x) * u64::from(self.chunk.width);
        if origin_y >= u64::from(shape.height) || origin_x >= u64::from(shape.width) {
            return Err(missing);
        }

        let channels = self.channels as usize;
        let row_len = self.chunk.width as usize * channels;
        let mut data = vec![0u8; row_len * self.chunk.height as usize];

        let rows = (u64::from(shape.height) - origin_y).min(u64::from(self.chunk.height)) as usize;
        let cols = (u64::from(shape.width) - origin_x).min(u64::from(self.chunk.width)) as usize;
        for row in 0..rows {
            let src_start =
                ((origin_y as usize + row) * shape.width as usize + origin_x as usize) * channels;
            let dst_start = row * row_len;
            data[dst_start..dst_start + cols * channels]
                .copy_from_slice(&raster[src_start..src_start + cols * channels]);
        }

        Ok(RawChunk::new(data, self.chunk.width, self.chunk.height))
    }
}

/// Largest raster a single in-memory level may hold, in bytes.
pub const MAX_RASTER_BYTES: usize = 1 << 30;

/// Bytes needed for one interleaved raster of `shape`.
fn raster_len(shape: Shape, channels: u32) -> Result<usize, GeometryError> {
    (shape.height as usize)
        .checked_mul(shape.width as usize)
        .and_then(|pixels| pixels.checked_mul(channels as usize))
        .filter(|&len| len <= MAX_RASTER_BYTES)
        .ok_or_else(|| {
            GeometryError::UnsupportedGeometry(format!(
                "raster {} with {} channels is too large",
                shape, channels
            ))
        })
}

impl PyramidSource for InMemoryPyramid {
    fn id(&self) -> &str {
        &self.id
    }

    fn num_levels(&self) -> u32 {
        self.levels.len() as u32
    }

    fn base_shape(&self) -> Shape {
        self.base
    }

    fn chunk_shape(&self) -> Shape {
        self.chunk
    }

    async fn get_raw_chunk(
        &self,
        level: u32,
        tile_y: u32,
        tile_x: u32,
        channel: u32,
    ) -> Result<RawChunk, ChunkError> {
        if channel != 0 {
            return Err(ChunkError::Missing {
                level,
                row: tile_y,
                col: tile_x,
            });
        }
        self.cut_chunk(level, tile_y, tile_x)
    }
}
