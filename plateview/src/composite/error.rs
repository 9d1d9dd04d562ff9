//! Composition errors.

use thiserror::Error;

use crate::layout::LayoutError;
use crate::tile::TileError;

/// Failure to compose one layer. Carries the offending layer's id.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositeError {
    #[error("Layer '{layer_id}': {source}")]
    Layout {
        layer_id: String,
        source: LayoutError,
    },

    #[error("Layer '{layer_id}': {source}")]
    Tile { layer_id: String, source: TileError },

    /// Plate layer without any well sources
    #[error("Layer '{layer_id}': plate has no wells")]
    EmptyPlate { layer_id: String },
}

impl CompositeError {
    /// Id of the layer that failed.
    pub fn layer_id(&self) -> &str {
        match self {
            CompositeError::Layout { layer_id, .. }
            | CompositeError::Tile { layer_id, .. }
            | CompositeError::EmptyPlate { layer_id } => layer_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_layout_error_keeps_source() {
        let err = CompositeError::Layout {
            layer_id: "layer-1".to_string(),
            source: LayoutError::LayoutMismatch {
                expected: 6,
                actual: 9,
            },
        };
        assert_eq!(err.layer_id(), "layer-1");
        assert!(err.to_string().starts_with("Layer 'layer-1': Layout mismatch"));
        assert!(err.source().is_some());
    }
}
