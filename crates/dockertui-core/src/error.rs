//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the terminal layer and the Docker daemon adapter
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Docker Daemon Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot connect to the Docker daemon: {message}")]
    DaemonUnavailable { message: String },

    #[error("Docker daemon error: {message}")]
    Daemon { message: String },

    #[error("Docker event stream error: {message}")]
    EventStream { message: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn daemon_unavailable(message: impl Into<String>) -> Self {
        Self::DaemonUnavailable {
            message: message.into(),
        }
    }

    pub fn daemon(message: impl Into<String>) -> Self {
        Self::Daemon {
            message: message.into(),
        }
    }

    pub fn event_stream(message: impl Into<String>) -> Self {
        Self::EventStream {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::daemon("No such container: abc");
        assert_eq!(err.to_string(), "Docker daemon error: No such container: abc");

        let err = Error::daemon_unavailable("socket not found");
        assert!(err.to_string().contains("Cannot connect to the Docker daemon"));
    }

    #[test]
    fn test_event_stream_error_keeps_cause() {
        let err = Error::event_stream("connection reset");
        assert_eq!(err.to_string(), "Docker event stream error: connection reset");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
