//! Event bridge: forwards daemon lifecycle events and stream errors into
//! the controller inbox.
//!
//! The bridge owns no UI state. It only writes to the inbox.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use dockertui_core::prelude::*;
use dockertui_core::LifecycleEvent;
use dockertui_daemon::EventStreams;

use crate::message::Message;

/// Message derived from a daemon event, if the controller cares about it
pub fn bridge_message(event: &LifecycleEvent) -> Option<Message> {
    event.triggers_refresh().then_some(Message::RefreshList)
}

/// Spawn the bridge task.
///
/// Runs until both streams close or the inbox is dropped.
pub fn spawn_event_bridge(streams: EventStreams, msg_tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(run_event_bridge(streams, msg_tx))
}

async fn run_event_bridge(streams: EventStreams, msg_tx: mpsc::Sender<Message>) {
    let EventStreams {
        mut events,
        mut errors,
    } = streams;
    let mut events_open = true;
    let mut errors_open = true;

    info!("Event bridge started");
    while events_open || errors_open {
        let message = tokio::select! {
            event = events.recv(), if events_open => match event {
                Some(event) => {
                    trace!("Bridge received event: {}", event.action);
                    bridge_message(&event)
                }
                None => {
                    events_open = false;
                    None
                }
            },
            err = errors.recv(), if errors_open => match err {
                Some(message) => Some(Message::ErrorNotification { message }),
                None => {
                    errors_open = false;
                    None
                }
            },
            else => break,
        };

        if let Some(msg) = message {
            if msg_tx.send(msg).await.is_err() {
                debug!("Inbox closed, stopping event bridge");
                return;
            }
        }
    }
    info!("Event bridge stopped: daemon streams closed");
}
