//! plateview - multiscale tiling and plate layout for microscopy images
//!
//! This library turns pyramidal images, alone or arranged as a plate of
//! wells, into the tiled layers a generic renderer can draw, and maps clicks
//! on those layers back to the wells they came from.
//!
//! # Architecture
//!
//! ```text
//! PyramidSource ──► PyramidGeometry ──► TileAddressTranslator ──► TileFetchAdapter
//!                                                                       │
//! GridLayoutPlanner ──► CompositeLayerBuilder ──► LayerDescriptor[] ◄───┘
//!                               │                        │
//!                               ▼                        ▼
//!                      InteractionDecoder       ViewStateInitializer
//! ```
//!
//! For most use cases, the [`session`] module ties these together:
//!
//! ```
//! use std::sync::Arc;
//! use plateview::config::ViewerConfig;
//! use plateview::log::NoOpLogger;
//! use plateview::pyramid::{InMemoryPyramid, Shape};
//! use plateview::session::{ImageConfig, ViewerSession};
//!
//! let wells = (0..6)
//!     .map(|n| Arc::new(InMemoryPyramid::gradient(format!("well-{}", n), 2, Shape::new(64, 64), Shape::new(32, 32)).unwrap()))
//!     .collect();
//!
//! let mut session = ViewerSession::new(&ViewerConfig::default(), Arc::new(NoOpLogger));
//! session.add_image(ImageConfig::plate(2, 3, wells).with_locator("https://example.org/plate.zarr"));
//!
//! let frame = session.render().unwrap();
//! assert_eq!(frame.layers.len(), 6);
//! ```

pub mod composite;
pub mod config;
pub mod interaction;
pub mod layout;
pub mod log;
pub mod logging;
pub mod pyramid;
pub mod session;
pub mod tile;
pub mod view;

/// Version of the plateview library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
