//! Docker daemon lifecycle events

/// A lifecycle notification from the daemon event stream.
///
/// `action` is the daemon's action string verbatim (`start`, `stop`, `die`,
/// `create`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub action: String,
    pub actor_id: Option<String>,
}

impl LifecycleEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            actor_id: None,
        }
    }

    pub fn with_actor(mut self, id: impl Into<String>) -> Self {
        self.actor_id = Some(id.into());
        self
    }

    /// Whether this event should cause the container list to be refetched.
    ///
    /// Only `start` and `stop` match; `die`, `kill`, `restart` and the rest
    /// are ignored.
    pub fn triggers_refresh(&self) -> bool {
        matches!(self.action.as_str(), "start" | "stop")
    }
}
