//! Container daemon capability trait
//!
//! The controller's commands and the event bridge only talk to the daemon
//! through this trait, so tests can substitute an in-memory fake.

use tokio::sync::mpsc;

use dockertui_core::prelude::*;
use dockertui_core::{LifecycleEvent, RawContainer};

/// Receivers for one daemon event subscription.
///
/// Both channels are unbounded. They close when the subscription ends.
#[derive(Debug)]
pub struct EventStreams {
    pub events: mpsc::UnboundedReceiver<LifecycleEvent>,
    /// Event-stream failures as display text
    pub errors: mpsc::UnboundedReceiver<String>,
}

impl EventStreams {
    /// Create a connected sender/receiver pair set
    pub fn channel() -> (
        mpsc::UnboundedSender<LifecycleEvent>,
        mpsc::UnboundedSender<String>,
        Self,
    ) {
        let (event_tx, events) = mpsc::unbounded_channel();
        let (error_tx, errors) = mpsc::unbounded_channel();
        (event_tx, error_tx, Self { events, errors })
    }
}

/// Operations consumed from the container daemon.
///
/// No caching and no retry: every call goes to the daemon.
#[trait_variant::make(ContainerDaemon: Send)]
pub trait LocalContainerDaemon {
    /// List containers; `all = false` returns running containers only
    async fn list_containers(&self, all: bool) -> Result<Vec<RawContainer>>;

    /// Ask the daemon to start a container
    async fn start_container(&self, id: &str) -> Result<()>;

    /// Ask the daemon to stop a container with its default grace period
    async fn stop_container(&self, id: &str) -> Result<()>;

    /// Subscribe to lifecycle events. Must be called inside a tokio runtime.
    fn subscribe_events(&self) -> EventStreams;
}
