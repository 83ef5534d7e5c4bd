//! Configuration file parsing for docker-tui
//!
//! Supports `<config_dir>/docker-tui/config.toml`. The file is optional.

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_user_settings, user_config_dir};
pub use types::*;
