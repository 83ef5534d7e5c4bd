//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key routing (filter gate, list bindings, row delegate, list navigation)
//! - `delegate`: Handlers scoped to the selected row

pub(crate) mod delegate;
pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects the event loop performs after update.
///
/// Each one runs on its own task and reports back through the inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// List containers and reply with `ContainersListed`
    RefreshContainers { all: bool, generation: u64 },

    /// Start a container; failures reply with `ErrorNotification`
    StartContainer { container_id: String },

    /// Stop a container; failures reply with `ErrorNotification`
    StopContainer { container_id: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
