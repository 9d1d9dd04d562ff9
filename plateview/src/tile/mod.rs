//! Tile addressing and fetching.
//!
//! This module turns the renderer's tile requests into chunk reads against a
//! [`PyramidSource`](crate::pyramid::PyramidSource).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    External renderer                        │
//! │          TileRequest { x, y, zoom } per visible tile        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   TileFetchAdapter<S>                       │
//! │        fetch(&TileRequest) -> TileResult | TileError        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │  TileAddressTranslator  │   │      PyramidSource          │
//! │  zoom → level, extent   │   │  get_raw_chunk(level, y, x) │
//! └─────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! Tile size equals chunk size, so after the zoom has been mapped to a level
//! the tile (x, y) *is* the chunk (col, row).
//!
//! # Example
//!
//! ```
//! use plateview::log::NoOpLogger;
//! use plateview::pyramid::{InMemoryPyramid, Shape};
//! use plateview::tile::{TileFetchAdapter, TileRequest};
//! use std::sync::Arc;
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let source = Arc::new(InMemoryPyramid::gradient(
//!     "demo",
//!     3,
//!     Shape::new(512, 512),
//!     Shape::new(256, 256),
//! ).unwrap());
//! let adapter = TileFetchAdapter::new(source, Arc::new(NoOpLogger)).unwrap();
//!
//! let result = adapter.fetch(&TileRequest::new(1, 1, 0)).await.unwrap();
//! assert!(result.image().is_some());
//!
//! // Beyond the right edge of the base level: no data, not an error
//! let result = adapter.fetch(&TileRequest::new(2, 0, 0)).await.unwrap();
//! assert!(result.is_absent());
//! # }
//! ```

mod error;
mod fetch;
mod request;
mod result;
mod translator;

pub use error::TileError;
pub use fetch::TileFetchAdapter;
pub use request::TileRequest;
pub use result::{TileImage, TileResult};
pub use translator::{ChunkAddress, TileAddressTranslator, TileBounds, TiledLayerProps};
