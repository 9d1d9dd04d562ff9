//! CLI runner for common setup.
//!
//! Encapsulates config loading and logging initialization so command
//! handlers only deal with their own work.

use std::path::Path;
use std::sync::Arc;

use plateview::config::ViewerConfig;
use plateview::log::{Logger, TracingLogger};
use plateview::logging::{init_logging, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ViewerConfig,
}

impl CliRunner {
    /// Load config (from `config_path` or the default location) and start
    /// logging.
    pub fn new(config_path: Option<&Path>) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ViewerConfig::load_from(path)?,
            None => ViewerConfig::load()?,
        };

        let logging_guard =
            init_logging(&config.logging).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Logger for library components, delegating to `tracing`.
    pub fn logger(&self) -> Arc<dyn Logger> {
        Arc::new(TracingLogger)
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("plateview v{}", plateview::VERSION);
        info!("plateview CLI: {} command", command);
    }
}
