//! Viewer configuration.
//!
//! Settings live in `~/.plateview/config.ini`, one `[section]` per concern:
//!
//! ```ini
//! [layout]
//! spacer = 5
//!
//! [interaction]
//! field_path = Field_1
//! origin = http://localhost:3000
//!
//! [logging]
//! directory = ~/.plateview/logs
//! file = plateview.log
//! ```
//!
//! A missing file yields the defaults. Settings can also be built in code:
//!
//! ```
//! use plateview::config::ViewerConfig;
//!
//! let config = ViewerConfig::default()
//!     .with_spacer(10.0)
//!     .with_field_path("Field_2");
//!
//! assert_eq!(config.layout.spacer, 10.0);
//! assert_eq!(config.interaction.field_path, "Field_2");
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_CONFIG_DIR, DEFAULT_FIELD_PATH, DEFAULT_LOG_FILE, DEFAULT_ORIGIN, DEFAULT_SPACER,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{InteractionSettings, LayoutSettings, LoggingSettings, ViewerConfig};
