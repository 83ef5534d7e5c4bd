//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: set up the terminal, daemon adapter, event bridge and signals
//! - `run_loop`: drain the inbox, render, poll terminal input

use tokio::sync::mpsc;

use dockertui_app::message::Message;
use dockertui_app::state::AppState;
use dockertui_app::{config, process_message, signals, spawn_event_bridge};
use dockertui_core::prelude::*;
use dockertui_daemon::{ContainerDaemon, DockerClient};

use super::{event, render};

/// Run the container list until the user quits or a signal arrives
pub async fn run() -> Result<()> {
    let settings = config::load_user_settings();
    info!(
        "Loaded settings: status_message_lifetime_ms={}, show_help={}",
        settings.ui.status_message_lifetime_ms, settings.ui.show_help
    );

    let daemon = DockerClient::new();

    // Initialize terminal; also installs a panic hook that restores it
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings.clone());

    // Single inbox for keys, action results, bridge events and signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(settings.events.inbox_capacity.max(1));

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM/SIGHUP)
    let signal_handler = signals::spawn_signal_handler(msg_tx.clone());

    let bridge = spawn_event_bridge(daemon.subscribe_events(), msg_tx.clone());

    let result = match term.size() {
        Ok(size) => {
            process_message(
                &mut state,
                Message::Resize {
                    width: size.width,
                    height: size.height,
                },
                &msg_tx,
                &daemon,
            );
            process_message(&mut state, Message::RefreshList, &msg_tx, &daemon);
            run_loop(&mut term, &mut state, msg_rx, msg_tx, &daemon)
        }
        Err(e) => Err(Error::terminal(format!("Failed to read terminal size: {}", e))),
    };

    bridge.abort();
    signal_handler.abort();

    // Restore terminal
    ratatui::restore();

    info!("docker-tui exiting");
    result
}

/// Main event loop
fn run_loop<D>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    daemon: &D,
) -> Result<()>
where
    D: ContainerDaemon + Clone + Sync + 'static,
{
    while !state.should_quit() {
        // Process external messages (action results, bridge, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, daemon);
        }

        if state.should_quit() {
            break;
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, daemon);
        }
    }

    Ok(())
}
