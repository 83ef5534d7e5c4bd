//! Row delegate: intents that apply to the selected container

use std::time::Instant;

use dockertui_core::ContainerState;

use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Start an exited container or stop a running one.
///
/// Empty selection and other states are silent no-ops.
pub fn handle_activate_selected(state: &mut AppState) -> UpdateResult {
    let Some(row) = state.list.selected_item() else {
        return UpdateResult::none();
    };

    let (status, next) = match row.state {
        ContainerState::Exited => (
            format!("Starting {}", row.title),
            Message::StartDockerContainer {
                container_id: row.container_id.clone(),
            },
        ),
        ContainerState::Running => (
            format!("Stopping {}", row.title),
            Message::StopDockerContainer {
                container_id: row.container_id.clone(),
            },
        ),
        ContainerState::Other(_) => return UpdateResult::none(),
    };

    let lifetime = state.status_message_lifetime();
    state
        .list
        .new_status_message(status, lifetime, Instant::now());
    UpdateResult::message(next)
}
