//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use dockertui_daemon::ContainerDaemon;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages run immediately; actions are spawned and report back
/// through `msg_tx`.
pub fn process_message<D>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    daemon: &D,
) where
    D: ContainerDaemon + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), daemon.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use dockertui_core::RawContainer;
    use dockertui_daemon::test_utils::{sample_containers, FakeDaemon};

    /// Feed every queued message back through the loop until it goes quiet
    async fn drain(
        state: &mut AppState,
        rx: &mut mpsc::Receiver<Message>,
        tx: &mpsc::Sender<Message>,
        daemon: &FakeDaemon,
    ) {
        while let Ok(Some(msg)) =
            tokio::time::timeout(std::time::Duration::from_millis(200), rx.recv()).await
        {
            process_message(state, msg, tx, daemon);
        }
    }

    #[tokio::test]
    async fn test_startup_refresh_populates_list() {
        let daemon = FakeDaemon::with_containers(sample_containers());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::RefreshList, &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;

        let titles: Vec<&str> = state.list.items().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["/api", "/builder", "/cache"]);
    }

    #[tokio::test]
    async fn test_mode_toggle_refetches_running_only() {
        let daemon = FakeDaemon::with_containers(sample_containers());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::RefreshList, &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;
        assert_eq!(state.list.items().len(), 3);

        process_message(&mut state, Message::Key(InputKey::Char('c')), &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;

        assert_eq!(state.list.title(), "Docker containers (running)");
        assert_eq!(state.list.items().len(), 1);
        assert_eq!(daemon.list_calls(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_enter_starts_exited_container_once() {
        let daemon = FakeDaemon::with_containers(vec![RawContainer::new(
            "abc123def456ghi",
            &["/web"],
            "exited",
        )]);
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::RefreshList, &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;

        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;

        assert_eq!(state.list.status_message(), Some("Starting /web"));
        assert_eq!(daemon.started(), vec!["abc123def456ghi".to_string()]);
        assert!(daemon.stopped().is_empty());
    }

    #[tokio::test]
    async fn test_daemon_failure_is_shown_not_fatal() {
        let daemon = FakeDaemon::new();
        daemon.fail_with("Cannot connect");
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::RefreshList, &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;

        assert_eq!(
            state.list.status_message(),
            Some("Docker daemon error: Cannot connect")
        );
        assert!(!state.should_quit());
    }

    #[tokio::test]
    async fn test_mode_toggle_with_failing_daemon_keeps_title_and_rows_consistent() {
        let daemon = FakeDaemon::with_containers(sample_containers());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::RefreshList, &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;
        assert_eq!(state.list.items().len(), 3);

        daemon.fail_with("daemon unreachable");
        process_message(&mut state, Message::Key(InputKey::Char('c')), &tx, &daemon);
        drain(&mut state, &mut rx, &tx, &daemon).await;

        assert_eq!(state.list.title(), "Docker containers (running)");
        assert!(state.list.items().is_empty());
        assert_eq!(
            state.list.status_message(),
            Some("Docker daemon error: daemon unreachable")
        );
    }
}
