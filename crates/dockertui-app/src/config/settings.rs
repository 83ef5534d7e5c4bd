//! Settings loading from `config.toml`

use std::path::{Path, PathBuf};

use dockertui_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "docker-tui";
const CONFIG_FILENAME: &str = "config.toml";

/// The user configuration directory, e.g. `~/.config/docker-tui`
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR))
}

/// Load settings from the user configuration directory.
///
/// Falls back to defaults when the platform has no config directory.
pub fn load_user_settings() -> Settings {
    match user_config_dir() {
        Some(dir) => load_settings(&dir),
        None => {
            debug!("No user config directory, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from `<config_dir>/config.toml`.
///
/// Missing or invalid files fall back to defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.ui.status_message_lifetime_ms, 1000);
        assert!(settings.ui.show_help);
        assert_eq!(settings.events.inbox_capacity, 256);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[ui]
status_message_lifetime_ms = 2500
show_help = false

[events]
inbox_capacity = 32
"#;
        std::fs::write(temp.path().join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.ui.status_message_lifetime_ms, 2500);
        assert!(!settings.ui.show_help);
        assert_eq!(settings.events.inbox_capacity, 32);
    }

    #[test]
    fn test_load_settings_partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[ui]\nshow_help = false\n").unwrap();

        let settings = load_settings(temp.path());

        assert!(!settings.ui.show_help);
        assert_eq!(settings.ui.status_message_lifetime_ms, 1000);
        assert_eq!(settings.events.inbox_capacity, 256);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "not valid toml {{{").unwrap();

        let settings = load_settings(temp.path());

        assert!(settings.ui.show_help);
        assert_eq!(settings.events.inbox_capacity, 256);
    }

    #[test]
    fn test_user_config_dir_is_named_after_app() {
        if let Some(dir) = user_config_dir() {
            assert!(dir.ends_with("docker-tui"));
        }
    }
}
