//! Container domain types shared by every layer

use std::fmt;

/// Number of characters of the container id shown in a row description
pub const SHORT_ID_LEN: usize = 12;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Container state as reported by the daemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerState {
    Running,
    Exited,
    /// Any other state string (`created`, `paused`, `restarting`, `dead`, ...)
    Other(String),
}

impl ContainerState {
    pub fn parse(state: &str) -> Self {
        match state {
            "running" => Self::Running,
            "exited" => Self::Exited,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Exited => "exited",
            Self::Other(s) => s,
        }
    }

    /// Only running and exited containers react to the start/stop key
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Running | Self::Exited)
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ContainerState {
    fn from(state: &str) -> Self {
        Self::parse(state)
    }
}

/// A container record as returned by the daemon list call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContainer {
    pub id: String,
    /// Daemon names, each conventionally prefixed with `/`
    pub names: Vec<String>,
    pub state: String,
}

impl RawContainer {
    pub fn new(id: impl Into<String>, names: &[&str], state: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: names.iter().map(|n| n.to_string()).collect(),
            state: state.into(),
        }
    }
}

/// One displayable row of the container list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRow {
    /// The container's first daemon name, verbatim
    pub title: String,
    /// `"<short id> <state>"`
    pub description: String,
    pub container_id: String,
    pub state: ContainerState,
}

impl ContainerRow {
    /// Build a row from a daemon record.
    ///
    /// A container without names is titled by its short id.
    pub fn from_raw(raw: &RawContainer) -> Self {
        let short = short_id(&raw.id);
        let title = raw
            .names
            .first()
            .cloned()
            .unwrap_or_else(|| short.to_string());
        Self {
            title,
            description: format!("{} {}", short, raw.state),
            container_id: raw.id.clone(),
            state: ContainerState::parse(&raw.state),
        }
    }

    /// Text the list filter matches against
    pub fn filter_value(&self) -> &str {
        &self.title
    }
}

/// First [`SHORT_ID_LEN`] characters of an id, or the whole id if shorter
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Sort rows ascending by title using byte-wise comparison.
///
/// The sort is stable, so rows with equal titles keep their daemon order.
pub fn sort_rows(rows: &mut [ContainerRow]) {
    rows.sort_by(|a, b| a.title.as_bytes().cmp(b.title.as_bytes()));
}

/// Convert a daemon listing into sorted rows
pub fn rows_from_containers(containers: &[RawContainer]) -> Vec<ContainerRow> {
    let mut rows: Vec<ContainerRow> = containers.iter().map(ContainerRow::from_raw).collect();
    sort_rows(&mut rows);
    rows
}

/// List header for the current listing mode
pub fn list_title(all_containers: bool) -> &'static str {
    if all_containers {
        "Docker containers (all)"
    } else {
        "Docker containers (running)"
    }
}
