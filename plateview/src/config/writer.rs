//! INI serialization, `ViewerConfig` → commented INI string.

use std::path::Path;

use super::settings::ViewerConfig;

/// Convert a `ViewerConfig` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ViewerConfig) -> String {
    format!(
        r#"[layout]
; Gap between wells of a plate, in pixels of the base level (default: 5)
spacer = {}

[interaction]
; Field folder opened when a well is clicked (default: Field_1)
field_path = {}
; Viewer address used to build navigation links
origin = {}

[logging]
; Directory for the log file
directory = {}
; Log file name (default: plateview.log)
file = {}
"#,
        config.layout.spacer,
        config.interaction.field_path,
        config.interaction.origin,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_every_key() {
        let content = to_config_string(&ViewerConfig::default());
        for key in ["spacer", "field_path", "origin", "directory", "file"] {
            assert!(
                content.lines().any(|line| line.starts_with(&format!("{} = ", key))),
                "missing key {}",
                key
            );
        }
    }

    #[test]
    fn test_fractional_spacer_is_written_exactly() {
        let content = to_config_string(&ViewerConfig::default().with_spacer(2.5));
        assert!(content.contains("spacer = 2.5"));
    }
}
