//! Multiscale image sources.
//!
//! A pyramid source is one image stored at several resolutions. The finest
//! resolution (the base) is level index 0; each further level halves both
//! dimensions. Levels are addressed from the outside with a non-positive
//! zoom offset, so zoom `0` is the base and zoom `-(num_levels - 1)` is the
//! coarsest level.
//!
//! ```text
//!   zoom  0  ──►  level 0   1024 × 2048   (base)
//!   zoom -1  ──►  level 1    512 × 1024
//!   zoom -2  ──►  level 2    256 × 512
//! ```
//!
//! Loading pixel data is the job of a [`PyramidSource`] implementation,
//! which the rest of the crate only ever reads through an `Arc`.
//! [`PyramidGeometry`] answers the pure size questions without touching
//! any data.

mod geometry;
mod memory;
mod source;

pub use geometry::{GeometryError, PyramidGeometry, Shape, MAX_LEVELS};
pub use memory::{InMemoryPyramid, MAX_RASTER_BYTES};
pub use source::{ChunkError, PyramidSource, RawChunk};
