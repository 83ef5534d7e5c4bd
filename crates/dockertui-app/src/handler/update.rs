//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use dockertui_core::{rows_from_containers, AppPhase};
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::AppState;

use super::{delegate, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Resize { width, height } => {
            state.resize(width, height);
            UpdateResult::none()
        }

        Message::Tick => {
            state.list.expire_status_message(Instant::now());
            UpdateResult::none()
        }

        Message::List(command) => {
            state.list.apply(command);
            UpdateResult::none()
        }

        Message::ToggleHelp => {
            let show = !state.list.show_help();
            state.list.set_show_help(show);
            UpdateResult::none()
        }

        Message::ToggleAllContainers => UpdateResult::message(state.toggle_all_containers()),

        Message::ActivateSelected => delegate::handle_activate_selected(state),

        // ─────────────────────────────────────────────────────────
        // Daemon Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshList => {
            let generation = state.next_refresh_generation();
            UpdateResult::action(UpdateAction::RefreshContainers {
                all: state.all_containers,
                generation,
            })
        }

        Message::ContainersListed {
            all,
            generation,
            containers,
        } => {
            if !state.accepts_refresh(all, generation) {
                debug!(
                    "Dropping stale container list (all={}, generation={})",
                    all, generation
                );
                return UpdateResult::none();
            }

            state.applied_generation = generation;
            state.displayed_all = all;
            state.rebuild_items(rows_from_containers(&containers));
            UpdateResult::none()
        }

        Message::ContainersListFailed {
            all,
            generation,
            message,
        } => {
            if state.accepts_refresh(all, generation) {
                state.applied_generation = generation;
                state.discard_rows_from_other_mode();
            }
            UpdateResult::message(Message::ErrorNotification { message })
        }

        Message::StartDockerContainer { container_id } => {
            UpdateResult::action(UpdateAction::StartContainer { container_id })
        }

        Message::StopDockerContainer { container_id } => {
            UpdateResult::action(UpdateAction::StopContainer { container_id })
        }

        Message::ErrorNotification { message } => {
            warn!("{}", message);
            let lifetime = state.status_message_lifetime();
            state
                .list
                .new_status_message(message, lifetime, Instant::now());
            UpdateResult::none()
        }
    }
}
