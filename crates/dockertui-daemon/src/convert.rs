//! Conversions from Docker Engine API models to domain types

use bollard::models::{ContainerSummary, EventMessage};

use dockertui_core::{LifecycleEvent, RawContainer};

/// Convert a list entry. Missing fields become empty values.
pub fn raw_container_from_summary(summary: ContainerSummary) -> RawContainer {
    RawContainer {
        id: summary.id.unwrap_or_default(),
        names: summary.names.unwrap_or_default(),
        state: summary.state.unwrap_or_default(),
    }
}

/// Convert an event. Events without an action carry an empty action.
pub fn lifecycle_event_from_message(message: EventMessage) -> LifecycleEvent {
    LifecycleEvent {
        action: message.action.unwrap_or_default(),
        actor_id: message.actor.and_then(|actor| actor.id),
    }
}
