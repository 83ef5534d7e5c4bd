//! Docker Engine implementation of [`ContainerDaemon`] backed by `bollard`

use std::collections::HashMap;
use std::sync::Arc;

use bollard::container::{ListContainersOptions, StartContainerOptions, StopContainerOptions};
use bollard::system::EventsOptions;
use bollard::Docker;
use futures_util::StreamExt;
use tokio::sync::{mpsc, OnceCell};

use dockertui_core::prelude::*;
use dockertui_core::{LifecycleEvent, RawContainer};

use crate::convert::{lifecycle_event_from_message, raw_container_from_summary};
use crate::daemon::{ContainerDaemon, EventStreams};

/// Docker daemon adapter.
///
/// The transport handle is established on first use and shared by every
/// clone, so the controller's commands and the event subscription use the
/// same connection settings.
#[derive(Debug, Clone, Default)]
pub struct DockerClient {
    handle: Arc<OnceCell<Docker>>,
}

impl DockerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the shared handle, connecting with the ambient environment
    /// (`DOCKER_HOST`, local socket or named pipe) on first use.
    async fn docker(&self) -> Result<&Docker> {
        self.handle
            .get_or_try_init(|| async {
                debug!("Connecting to Docker daemon");
                Docker::connect_with_local_defaults()
                    .map_err(|e| Error::daemon_unavailable(e.to_string()))
            })
            .await
    }
}

impl ContainerDaemon for DockerClient {
    async fn list_containers(&self, all: bool) -> Result<Vec<RawContainer>> {
        let docker = self.docker().await?;
        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        let summaries = docker
            .list_containers(Some(options))
            .await
            .map_err(|e| Error::daemon(e.to_string()))?;

        debug!("Listed {} containers (all={})", summaries.len(), all);
        Ok(summaries
            .into_iter()
            .map(raw_container_from_summary)
            .collect())
    }

    async fn start_container(&self, id: &str) -> Result<()> {
        let docker = self.docker().await?;
        docker
            .start_container(id, None::<StartContainerOptions<String>>)
            .await
            .map_err(|e| Error::daemon(e.to_string()))?;
        info!("Started container {}", id);
        Ok(())
    }

    async fn stop_container(&self, id: &str) -> Result<()> {
        let docker = self.docker().await?;
        docker
            .stop_container(id, None::<StopContainerOptions>)
            .await
            .map_err(|e| Error::daemon(e.to_string()))?;
        info!("Stopped container {}", id);
        Ok(())
    }

    fn subscribe_events(&self) -> EventStreams {
        let (event_tx, error_tx, streams) = EventStreams::channel();
        let client = self.clone();
        tokio::spawn(async move {
            pump_events(client, event_tx, error_tx).await;
        });
        streams
    }
}

/// Forward the daemon's event stream into the subscription channels.
///
/// Returns when the daemon closes the stream or both receivers are dropped.
async fn pump_events(
    client: DockerClient,
    event_tx: mpsc::UnboundedSender<LifecycleEvent>,
    error_tx: mpsc::UnboundedSender<String>,
) {
    let docker = match client.docker().await {
        Ok(docker) => docker,
        Err(e) => {
            warn!("Event subscription failed: {}", e);
            let _ = error_tx.send(e.to_string());
            return;
        }
    };

    let options = EventsOptions::<String> {
        filters: HashMap::from([("type".to_string(), vec!["container".to_string()])]),
        ..Default::default()
    };
    let stream = docker.events(Some(options));
    tokio::pin!(stream);

    info!("Subscribed to Docker events");
    while let Some(item) = stream.next().await {
        let delivered = match item {
            Ok(message) => {
                let event = lifecycle_event_from_message(message);
                trace!("Docker event: {} {:?}", event.action, event.actor_id);
                event_tx.send(event).is_ok()
            }
            Err(e) => {
                let err = Error::event_stream(e.to_string());
                warn!("{}", err);
                error_tx.send(err.to_string()).is_ok()
            }
        };

        if !delivered && event_tx.is_closed() && error_tx.is_closed() {
            debug!("Event subscribers gone, stopping pump");
            return;
        }
    }

    info!("Docker event stream ended");
}
