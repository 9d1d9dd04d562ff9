//! INI parsing, `Ini` → `ViewerConfig`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ViewerConfig;

/// Parse an `Ini` into a `ViewerConfig`.
///
/// Starts from `ViewerConfig::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ViewerConfig, ConfigFileError> {
    let mut config = ViewerConfig::default();

    // [layout] section
    if let Some(section) = ini.section(Some("layout")) {
        if let Some(v) = section.get("spacer") {
            config.layout.spacer = parse_spacer(v)?;
        }
    }

    // [interaction] section
    if let Some(section) = ini.section(Some("interaction")) {
        if let Some(v) = section.get("field_path") {
            let v = v.trim();
            if v.contains('/') {
                return Err(ConfigFileError::InvalidValue {
                    section: "interaction".to_string(),
                    key: "field_path".to_string(),
                    value: v.to_string(),
                    reason: "must be a single path segment without '/'".to_string(),
                });
            }
            if !v.is_empty() {
                config.interaction.field_path = v.to_string();
            }
        }
        if let Some(v) = section.get("origin") {
            let v = v.trim();
            if !v.is_empty() {
                config.interaction.origin = v.to_string();
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn parse_spacer(value: &str) -> Result<f64, ConfigFileError> {
    let invalid = |reason: &str| ConfigFileError::InvalidValue {
        section: "layout".to_string(),
        key: "spacer".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };
    let spacer: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid("must be a number"))?;
    if !spacer.is_finite() || spacer < 0.0 {
        return Err(invalid("must be a non-negative, finite number"));
    }
    Ok(spacer)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
