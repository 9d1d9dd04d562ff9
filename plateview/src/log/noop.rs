//! Logger that discards everything.

use std::fmt::Arguments;

use super::{LogLevel, Logger};

/// Silent logger for tests and embedding hosts that do their own logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
