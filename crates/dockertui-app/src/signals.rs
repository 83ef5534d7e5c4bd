//! Turns OS termination signals into `Message::Quit`

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use dockertui_core::prelude::*;

use crate::message::Message;

/// Listen for SIGINT, SIGTERM and SIGHUP (Ctrl+C on windows) and post a
/// single `Message::Quit` when one arrives.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(forward_shutdown(termination_signal(), tx))
}

/// Await `signal`, then ask the controller to quit
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<&'static str>>,
{
    match signal.await {
        Ok(name) => {
            info!("Received {}, quitting", name);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Inbox closed before quit could be delivered");
            }
        }
        Err(e) => error!("Signal handler error: {}", e),
    }
}

#[cfg(unix)]
async fn termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = listen(SignalKind::hangup(), "SIGHUP")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = hangup.recv() => "SIGHUP",
    })
}

#[cfg(windows)]
async fn termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}
