//! Default values for all configuration settings.

use super::file::config_directory;
use super::settings::*;

/// Gap between neighbouring wells, in scene units.
pub const DEFAULT_SPACER: f64 = 5.0;

/// Field segment appended to well locators.
pub const DEFAULT_FIELD_PATH: &str = "Field_1";

/// Viewer origin used to build navigation URLs.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Name of the configuration directory under the home directory.
pub const DEFAULT_CONFIG_DIR: &str = ".plateview";

/// Log file name.
pub const DEFAULT_LOG_FILE: &str = "plateview.log";

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSettings {
                spacer: DEFAULT_SPACER,
            },
            interaction: InteractionSettings {
                field_path: DEFAULT_FIELD_PATH.to_string(),
                origin: DEFAULT_ORIGIN.to_string(),
            },
            logging: LoggingSettings {
                directory: config_directory().join("logs"),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
