//! # dockertui-core - Core Domain Types
//!
//! Foundation crate for docker-tui. Provides domain types, error handling,
//! daemon event definitions and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, tracing-appender, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RawContainer`] - A container as reported by the daemon
//! - [`ContainerRow`] - One row of the container list (title, description, id, state)
//! - [`ContainerState`] - `running`, `exited`, or any other daemon state string
//! - [`AppPhase`] - Running or quitting
//!
//! ### Events (`events`)
//! - [`LifecycleEvent`] - A daemon lifecycle notification tagged by action
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for the terminal and daemon layers
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dockertui_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all docker-tui crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use events::LifecycleEvent;
pub use types::{
    list_title, rows_from_containers, short_id, sort_rows, AppPhase, ContainerRow, ContainerState,
    RawContainer,
};
