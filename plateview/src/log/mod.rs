//! Logger abstraction used by the tiling and composition components.
//!
//! Components take an `Arc<dyn Logger>` instead of calling `tracing`
//! directly, so tests can silence them or inspect what they logged.
//!
//! - [`TracingLogger`] forwards to the `tracing` crate (production)
//! - [`NoOpLogger`] discards everything
//! - [`MemoryLogger`] keeps every message for assertions
//!
//! ```
//! use plateview::log::{LogLevel, Logger, MemoryLogger};
//! use plateview::log_warn;
//! use std::sync::Arc;
//!
//! let logger = Arc::new(MemoryLogger::new());
//! log_warn!(logger, "chunk {} unreadable", 7);
//! assert_eq!(logger.messages_at(LogLevel::Warn), vec!["chunk 7 unreadable"]);
//! ```

mod logger;
mod memory;
mod noop;
mod tracing_adapter;

pub use logger::{LogLevel, Logger};
pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use tracing_adapter::TracingLogger;
