//! Configuration types

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub events: EventSettings,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a status line stays visible, in milliseconds
    #[serde(default = "default_status_message_lifetime_ms")]
    pub status_message_lifetime_ms: u64,

    /// Show the help panel on startup
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            status_message_lifetime_ms: default_status_message_lifetime_ms(),
            show_help: true,
        }
    }
}

/// Event loop settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventSettings {
    /// Capacity of the controller inbox
    #[serde(default = "default_inbox_capacity")]
    pub inbox_capacity: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            inbox_capacity: default_inbox_capacity(),
        }
    }
}

fn default_status_message_lifetime_ms() -> u64 {
    1000
}

fn default_inbox_capacity() -> usize {
    256
}

fn default_true() -> bool {
    true
}
