//! Camera state and its one-shot initialization.
//!
//! The store starts [`ViewGate::Uninitialized`]. The first concrete value,
//! either set by the host or computed by [`ViewStateInitializer`] from the
//! first rendered layer, flips it to [`ViewGate::Initialized`] for good.

mod initializer;
mod state;

pub use initializer::ViewStateInitializer;
pub use state::{ViewGate, ViewState, ViewStateStore};
