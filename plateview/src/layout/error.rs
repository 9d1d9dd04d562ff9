//! Layout errors.

use thiserror::Error;

/// Errors from grid planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Source count differs from rows × columns
    #[error("Layout mismatch: grid needs {expected} sources, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// Grid parameters that cannot describe a plate
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}
