//! Viewer session state.
//!
//! [`ViewerSession`] owns everything one viewer shows: the ordered image
//! layers, each pending or ready and visible or hidden, and the view state.
//! A [`Frame`] is produced on demand by composing the ready layers and, on
//! the first frame with content, initializing the view.

mod error;
mod id;
mod viewer;

pub use error::SessionError;
pub use id::LayerId;
pub use viewer::{Frame, ImageConfig, ViewerSession};
