//! Message types for the application (TEA pattern)

use dockertui_core::RawContainer;

use crate::input_key::InputKey;
use crate::list::ListCommand;

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal resized
    Resize { width: u16, height: u16 },

    /// Tick event for periodic updates (status message expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Cursor, filter and help operations on the list
    List(ListCommand),

    // ─────────────────────────────────────────────────────────
    // List-level bindings
    // ─────────────────────────────────────────────────────────
    /// Show or hide the help panel
    ToggleHelp,

    /// Switch between all and running-only containers
    ToggleAllContainers,

    /// Start or stop the selected container, depending on its state
    ActivateSelected,

    // ─────────────────────────────────────────────────────────
    // Daemon Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the container list for the current view mode
    RefreshList,

    /// A list fetch completed
    ContainersListed {
        all: bool,
        generation: u64,
        containers: Vec<RawContainer>,
    },

    /// A list fetch failed
    ContainersListFailed {
        all: bool,
        generation: u64,
        message: String,
    },

    StartDockerContainer { container_id: String },

    StopDockerContainer { container_id: String },

    /// Show an error as a transient status line
    ErrorNotification { message: String },
}
