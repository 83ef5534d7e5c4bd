//! # dockertui-daemon - Docker Daemon Adapter
//!
//! A thin capability layer over the local Docker daemon: list containers,
//! start or stop one by id, and subscribe to lifecycle events.
//!
//! Depends on [`dockertui_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Capability
//! - [`ContainerDaemon`] - The operations the controller and event bridge consume
//! - [`EventStreams`] - The two unbounded receivers returned by a subscription
//!
//! ### Docker Engine implementation
//! - [`DockerClient`] - `bollard`-backed adapter with a lazily connected shared handle
//!
//! ### Model conversion
//! - [`raw_container_from_summary()`] - `bollard` list entry to [`dockertui_core::RawContainer`]
//! - [`lifecycle_event_from_message()`] - `bollard` event to [`dockertui_core::LifecycleEvent`]

pub mod client;
pub mod convert;
pub mod daemon;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::DockerClient;
pub use convert::{lifecycle_event_from_message, raw_container_from_summary};
pub use daemon::{ContainerDaemon, EventStreams, LocalContainerDaemon};
