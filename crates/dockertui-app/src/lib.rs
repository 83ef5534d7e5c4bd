//! dockertui-app - Application state and orchestration for docker-tui
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! `update()` function consumes one [`Message`] at a time, mutates
//! [`AppState`] and returns deferred [`UpdateAction`]s. Actions run against
//! the daemon on background tasks and report back as messages. The event
//! bridge feeds daemon lifecycle events into the same inbox.
//!
//! No terminal library types appear here; the TUI crate converts input into
//! [`InputKey`] and renders [`AppState`].

pub mod actions;
pub mod bridge;
pub mod config;
pub mod fuzzy;
pub mod handler;
pub mod input_key;
pub mod keymap;
pub mod list;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use bridge::spawn_event_bridge;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list::{ContainerList, FilterState, ListCommand};
pub use message::Message;
pub use process::process_message;
pub use state::AppState;
