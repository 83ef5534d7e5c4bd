//! dockertui-tui - Terminal UI for docker-tui
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! rendering of the container list, and the main loop that drives the
//! controller from dockertui-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
