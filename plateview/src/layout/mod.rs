//! Plate layout: placing a grid of independent sources in one scene.
//!
//! A plate is `rows × columns` wells, each its own pyramid source. Every
//! well gets the same cell size plus a fixed spacer, and the whole grid is
//! centered on the scene origin:
//!
//! ```text
//!          left
//!   top ┌──────┐ ┌──────┐ ┌──────┐
//!       │ 0,0  │ │ 0,1  │ │ 0,2  │
//!       └──────┘ └──────┘ └──────┘
//!       ┌──────┐ ┌──────┐ ┌──────┐     (0, 0) is the center of the
//!       │ 1,0  │ │ 1,1  │ │ 1,2  │      slots, spacers included
//!       └──────┘ └──────┘ └──────┘
//! ```
//!
//! Cells are structured values ([`CellId`]); the string form
//! `"{base}-plate-{row}-{col}"` only exists at the renderer boundary.

mod error;
mod grid;
mod id;

pub use error::LayoutError;
pub use grid::{GridCell, GridLayoutPlanner, GridSpec};
pub use id::{CellId, GRID_MARKER};
