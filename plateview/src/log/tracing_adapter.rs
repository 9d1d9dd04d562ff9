//! Adapter from [`Logger`] to the `tracing` crate.

use std::fmt::Arguments;

use super::{LogLevel, Logger};

/// Forwards component messages to `tracing` under the `plateview` target.
///
/// Output goes wherever the installed subscriber sends it; see
/// [`crate::logging::init_logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "plateview", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "plateview", "{}", args),
            LogLevel::Info => tracing::info!(target: "plateview", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "plateview", "{}", args),
            LogLevel::Error => tracing::error!(target: "plateview", "{}", args),
        }
    }
}
