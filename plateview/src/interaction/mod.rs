//! Click handling for plate layers.
//!
//! The renderer only knows string layer ids. When a well is clicked it
//! reports the id it was given (`"{base}-plate-{row}-{col}"`) together with
//! the source locator of that layer. [`InteractionDecoder`] turns that back
//! into a row and column and builds the locator of the well's own image:
//!
//! ```text
//! "https://host/plate.zarr" + row 2, col 3
//!     ──► "https://host/plate.zarr/0/C/4/Field_1/"
//! ```
//!
//! Anything that is not a well click is ignored, not rejected.

mod decoder;

pub use decoder::{ClickHandler, Decoded, InteractionDecoder, NavigationRequest, PickEvent, ROW_LETTERS};
