//! Error types for tile addressing and fetching.

use thiserror::Error;

use super::ChunkAddress;
use crate::pyramid::GeometryError;

/// Errors that can occur while translating or fetching a tile.
///
/// `InvalidLevel`, `OutOfRange` and `UnsupportedGeometry` are configuration
/// errors and should not be retried. `FetchFailed` is environmental and left
/// to the caller's retry policy. A tile that simply has no data is not an
/// error at all; see [`TileResult::Absent`](super::TileResult::Absent).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    /// Zoom does not map to a pyramid level
    #[error("Invalid level: zoom {zoom} (must be between {min_zoom} and 0)")]
    InvalidLevel { zoom: f64, min_zoom: i32 },

    /// Tile lies outside the level extent
    #[error("Tile ({x}, {y}) at zoom {zoom} is outside the image extent")]
    OutOfRange { x: i64, y: i64, zoom: i32 },

    /// Source geometry cannot be tiled
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// The chunk store failed for a reason other than missing data
    #[error("Fetch failed for source '{source_id}' at {chunk}: {reason}")]
    FetchFailed {
        /// Source identifier
        source_id: String,
        /// Requested chunk
        chunk: ChunkAddress,
        /// Underlying failure
        reason: String,
    },
}

impl TileError {
    /// True if a retry might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, TileError::FetchFailed { .. })
    }
}

impl From<GeometryError> for TileError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InvalidLevel { zoom, min_zoom } => {
                TileError::InvalidLevel { zoom, min_zoom }
            }
            GeometryError::UnsupportedGeometry(msg) => TileError::UnsupportedGeometry(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = TileError::OutOfRange {
            x: 9,
            y: -1,
            zoom: -2,
        };
        assert_eq!(
            err.to_string(),
            "Tile (9, -1) at zoom -2 is outside the image extent"
        );
    }

    #[test]
    fn test_fetch_failed_display_has_context() {
        let err = TileError::FetchFailed {
            source_id: "plate-a".to_string(),
            chunk: ChunkAddress {
                level: 2,
                row: 3,
                col: 4,
            },
            reason: "truncated".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("plate-a"));
        assert!(msg.contains("level 2"));
        assert!(msg.contains("truncated"));
    }

    #[test]
    fn test_only_fetch_failures_are_transient() {
        let failed = TileError::FetchFailed {
            source_id: "s".to_string(),
            chunk: ChunkAddress {
                level: 0,
                row: 0,
                col: 0,
            },
            reason: "io".to_string(),
        };
        assert!(failed.is_transient());
        assert!(!TileError::UnsupportedGeometry("x".to_string()).is_transient());
    }

    #[test]
    fn test_from_geometry_error() {
        let err: TileError = GeometryError::InvalidLevel {
            zoom: -7.0,
            min_zoom: -3,
        }
        .into();
        assert_eq!(
            err,
            TileError::InvalidLevel {
                zoom: -7.0,
                min_zoom: -3
            }
        );
    }
}
