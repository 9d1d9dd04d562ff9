//! Tile to chunk address translation.

use std::fmt;

use super::{TileError, TileRequest};
use crate::pyramid::PyramidGeometry;

/// A chunk inside one pyramid level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkAddress {
    /// Level index, 0 being the base
    pub level: u32,
    /// Chunk row (tile y)
    pub row: u32,
    /// Chunk column (tile x)
    pub col: u32,
}

impl fmt::Display for ChunkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} chunk ({}, {})", self.level, self.row, self.col)
    }
}

/// Scene-space rectangle covered by a tile, in base-level pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl TileBounds {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Parameters a tiled renderer layer needs for one source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiledLayerProps {
    /// Edge length of a square tile in pixels
    pub tile_size: u32,
    /// Coarsest zoom, `-(num_levels - 1)`
    pub min_zoom: i32,
    /// Finest zoom, always 0
    pub max_zoom: i32,
    /// `[left, top, right, bottom]` of the base raster
    pub extent: [f64; 4],
}

/// Maps tile requests onto pyramid chunks.
///
/// Owns the negative zoom convention: zoom 0 reads the base level, zoom
/// `-k` reads level `k`. Requires square chunks, because the chunk edge is
/// used as the tile size on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileAddressTranslator {
    geometry: PyramidGeometry,
    tile_size: u32,
}

impl TileAddressTranslator {
    /// Create a translator for a geometry.
    ///
    /// # Errors
    ///
    /// `UnsupportedGeometry` if the chunk shape is not square.
    pub fn new(geometry: PyramidGeometry) -> Result<Self, TileError> {
        let chunk = geometry.chunk_size();
        if !chunk.is_square() {
            return Err(TileError::UnsupportedGeometry(format!(
                "chunk shape {} is not square",
                chunk
            )));
        }
        Ok(Self {
            geometry,
            tile_size: chunk.width,
        })
    }

    pub fn geometry(&self) -> &PyramidGeometry {
        &self.geometry
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Level index for a (possibly fractional) zoom.
    pub fn level_for_zoom(&self, zoom: f64) -> Result<u32, TileError> {
        Ok(self.geometry.level_index(zoom)?)
    }

    /// Resolve a request to the chunk holding its pixels.
    ///
    /// # Errors
    ///
    /// * `InvalidLevel` if the zoom maps to no level
    /// * `OutOfRange` if the tile starts outside `[0, width) × [0, height)`
    ///   of the selected level
    pub fn translate(&self, request: &TileRequest) -> Result<ChunkAddress, TileError> {
        let level = self.level_for_zoom(f64::from(request.zoom()))?;
        let raster = self.geometry.level_shape(level);
        let size = i64::from(self.tile_size);

        let out_of_range = TileError::OutOfRange {
            x: request.x(),
            y: request.y(),
            zoom: request.zoom(),
        };
        if request.x() < 0 || request.y() < 0 {
            return Err(out_of_range);
        }
        let (left, top) = match (request.x().checked_mul(size), request.y().checked_mul(size)) {
            (Some(left), Some(top)) => (left, top),
            _ => return Err(out_of_range),
        };
        if left >= i64::from(raster.width) || top >= i64::from(raster.height) {
            return Err(out_of_range);
        }

        Ok(ChunkAddress {
            level,
            row: request.y() as u32,
            col: request.x() as u32,
        })
    }

    /// Scene rectangle covered by a tile, clipped to the base extent.
    ///
    /// A tile at level `k` spans `tile_size * 2^k` base pixels per side.
    pub fn bounds(&self, request: &TileRequest) -> Result<TileBounds, TileError> {
        let address = self.translate(request)?;
        let span = f64::from(self.tile_size) * f64::from(1u32 << address.level);
        let base = self.geometry.base_shape();

        let left = f64::from(address.col) * span;
        let top = f64::from(address.row) * span;
        Ok(TileBounds {
            left,
            top,
            right: (left + span).min(f64::from(base.width)),
            bottom: (top + span).min(f64::from(base.height)),
        })
    }

    /// Layer parameters for the renderer.
    pub fn layer_props(&self) -> TiledLayerProps {
        let base = self.geometry.base_shape();
        TiledLayerProps {
            tile_size: self.tile_size,
            min_zoom: self.geometry.min_zoom(),
            max_zoom: self.geometry.max_zoom(),
            extent: [0.0, 0.0, f64::from(base.width), f64::from(base.height)],
        }
    }
}
