//! Action dispatch: runs `UpdateAction`s against the daemon on background
//! tasks and posts their results back into the inbox.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use dockertui_core::prelude::*;
use dockertui_daemon::ContainerDaemon;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Spawn a task executing `action`.
///
/// Daemon failures never abort the process; they come back as
/// `Message::ErrorNotification`.
pub fn handle_action<D>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, daemon: D) -> JoinHandle<()>
where
    D: ContainerDaemon + Sync + 'static,
{
    tokio::spawn(async move {
        let reply = run_action(action, &daemon).await;
        if let Some(msg) = reply {
            if msg_tx.send(msg).await.is_err() {
                debug!("Inbox closed before action result was delivered");
            }
        }
    })
}

async fn run_action<D: ContainerDaemon + Sync>(action: UpdateAction, daemon: &D) -> Option<Message> {
    match action {
        UpdateAction::RefreshContainers { all, generation } => {
            match daemon.list_containers(all).await {
                Ok(containers) => Some(Message::ContainersListed {
                    all,
                    generation,
                    containers,
                }),
                Err(e) => {
                    error!("Failed to list containers: {}", e);
                    Some(Message::ContainersListFailed {
                        all,
                        generation,
                        message: e.to_string(),
                    })
                }
            }
        }

        UpdateAction::StartContainer { container_id } => daemon
            .start_container(&container_id)
            .await
            .err()
            .map(|e| error_notification("Failed to start container", e)),

        UpdateAction::StopContainer { container_id } => daemon
            .stop_container(&container_id)
            .await
            .err()
            .map(|e| error_notification("Failed to stop container", e)),
    }
}

fn error_notification(context: &str, err: Error) -> Message {
    error!("{}: {}", context, err);
    Message::ErrorNotification {
        message: err.to_string(),
    }
}
