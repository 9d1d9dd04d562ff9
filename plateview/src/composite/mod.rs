//! Layer composition.
//!
//! Turns the viewer's image layers into the flat, ordered list of
//! [`LayerDescriptor`]s the renderer draws:
//!
//! ```text
//! LayerState::NotReady              ──► (nothing)
//! Ready, hidden                     ──► (nothing)
//! Ready, Single(source)             ──► 1 descriptor   id = "{id}", at (0, 0)
//! Ready, Plate { rows, columns, .. } ──► rows × columns descriptors
//!                                        id = "{id}-plate-{row}-{col}",
//!                                        pickable, offset from the grid planner
//! ```
//!
//! A build either yields every descriptor or fails as a whole. Descriptors
//! are rebuilt from scratch on each call and never edited afterwards.

mod builder;
mod error;
mod layer;

pub use builder::CompositeLayerBuilder;
pub use error::CompositeError;
pub use layer::{ImageLayer, LayerContent, LayerDescriptor, LayerState};
