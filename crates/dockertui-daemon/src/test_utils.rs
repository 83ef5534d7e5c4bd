//! Test utilities for the daemon adapter
//!
//! Provides [`FakeDaemon`], an in-memory [`ContainerDaemon`] that records
//! calls and can be told to fail.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;

use dockertui_core::prelude::*;
use dockertui_core::{LifecycleEvent, RawContainer};

use crate::daemon::{ContainerDaemon, EventStreams};

#[derive(Debug, Default)]
struct FakeState {
    containers: Vec<RawContainer>,
    list_calls: Vec<bool>,
    started: Vec<String>,
    stopped: Vec<String>,
    fail_with: Option<String>,
    event_tx: Option<mpsc::UnboundedSender<LifecycleEvent>>,
    error_tx: Option<mpsc::UnboundedSender<String>>,
}

/// In-memory daemon. Clones share state.
///
/// `list_containers(false)` returns only containers whose state is `running`.
#[derive(Debug, Clone, Default)]
pub struct FakeDaemon {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDaemon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fake that already reports the given containers.
    pub fn with_containers(containers: Vec<RawContainer>) -> Self {
        let fake = Self::new();
        fake.set_containers(containers);
        fake
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        // A poisoned lock only happens after another test thread panicked.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_containers(&self, containers: Vec<RawContainer>) {
        self.lock().containers = containers;
    }

    /// Make every subsequent call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().fail_with = Some(message.into());
    }

    pub fn list_calls(&self) -> Vec<bool> {
        self.lock().list_calls.clone()
    }

    pub fn started(&self) -> Vec<String> {
        self.lock().started.clone()
    }

    pub fn stopped(&self) -> Vec<String> {
        self.lock().stopped.clone()
    }

    /// Push an event to the current subscriber, if any.
    pub fn emit_event(&self, event: LifecycleEvent) {
        if let Some(tx) = &self.lock().event_tx {
            let _ = tx.send(event);
        }
    }

    /// Push an event-stream error to the current subscriber, if any.
    pub fn emit_error(&self, message: impl Into<String>) {
        if let Some(tx) = &self.lock().error_tx {
            let _ = tx.send(message.into());
        }
    }

    /// Close both subscription streams.
    pub fn close_streams(&self) {
        let mut state = self.lock();
        state.event_tx = None;
        state.error_tx = None;
    }

    fn check_failure(&self) -> Result<()> {
        match &self.lock().fail_with {
            Some(message) => Err(Error::daemon(message.clone())),
            None => Ok(()),
        }
    }
}

impl ContainerDaemon for FakeDaemon {
    async fn list_containers(&self, all: bool) -> Result<Vec<RawContainer>> {
        self.lock().list_calls.push(all);
        self.check_failure()?;
        let state = self.lock();
        Ok(state
            .containers
            .iter()
            .filter(|c| all || c.state == "running")
            .cloned()
            .collect())
    }

    async fn start_container(&self, id: &str) -> Result<()> {
        self.lock().started.push(id.to_string());
        self.check_failure()
    }

    async fn stop_container(&self, id: &str) -> Result<()> {
        self.lock().stopped.push(id.to_string());
        self.check_failure()
    }

    fn subscribe_events(&self) -> EventStreams {
        let (event_tx, error_tx, streams) = EventStreams::channel();
        let mut state = self.lock();
        state.event_tx = Some(event_tx);
        state.error_tx = Some(error_tx);
        streams
    }
}

/// Three containers, one of them running.
pub fn sample_containers() -> Vec<RawContainer> {
    vec![
        RawContainer::new("cccccccccccc0003", &["/cache"], "exited"),
        RawContainer::new("aaaaaaaaaaaa0001", &["/api"], "running"),
        RawContainer::new("bbbbbbbbbbbb0002", &["/builder"], "created"),
    ]
}
