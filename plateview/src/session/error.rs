//! Session errors.

use thiserror::Error;

use super::LayerId;
use crate::composite::CompositeError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Unknown layer: {0}")]
    UnknownLayer(LayerId),

    #[error(transparent)]
    Composite(#[from] CompositeError),
}
