//! Settings structs, one per `[section]` of the INI file.

use std::path::PathBuf;

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub layout: LayoutSettings,
    pub interaction: InteractionSettings,
    pub logging: LoggingSettings,
}

/// Plate layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    /// Gap between wells in scene units, non-negative
    pub spacer: f64,
}

/// Click navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    /// Last path segment of a well locator, e.g. `Field_1`
    pub field_path: String,
    /// Viewer origin that navigation URLs are built on
    pub origin: String,
}

/// Log output.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory the log file is written to
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}

impl ViewerConfig {
    pub fn with_spacer(mut self, spacer: f64) -> Self {
        self.layout.spacer = spacer;
        self
    }

    pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
        self.interaction.field_path = field_path.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.interaction.origin = origin.into();
        self
    }

    pub fn with_log_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.logging.directory = directory.into();
        self
    }

    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.logging.file = file.into();
        self
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.logging.directory.join(&self.logging.file)
    }
}
