//! Roster fetch errors and their user-facing messages

use std::fmt;

/// Shown when the endpoint answers 404
pub const NOT_FOUND_MESSAGE: &str = "Group not found";

/// Shown for every other failure status and for unparseable bodies
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load group data";

/// Shown for transport failures that carry no message of their own
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Errors that can occur while fetching the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Endpoint answered 404
    NotFound,
    /// Endpoint answered any other non-success status
    LoadFailed { status: u16 },
    /// No response at all (connect, TLS, reset, body read)
    Transport(Option<String>),
    /// Success status but the body did not match the roster shape
    Malformed(String),
}

impl RosterError {
    /// Classify a non-success status. The response body is never consulted.
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::LoadFailed { status }
        }
    }

    /// Text rendered in the error view
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => NOT_FOUND_MESSAGE.to_string(),
            Self::LoadFailed { .. } | Self::Malformed(_) => LOAD_FAILED_MESSAGE.to_string(),
            Self::Transport(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            Self::Transport(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "roster endpoint returned 404"),
            Self::LoadFailed { status } => write!(f, "roster endpoint returned {}", status),
            Self::Transport(Some(msg)) => write!(f, "roster request failed: {}", msg),
            Self::Transport(None) => write!(f, "roster request failed"),
            Self::Malformed(msg) => write!(f, "malformed roster body: {}", msg),
        }
    }
}

impl std::error::Error for RosterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_is_not_found() {
        assert_eq!(RosterError::from_status(404), RosterError::NotFound);
        assert_eq!(
            RosterError::from_status(404).user_message(),
            NOT_FOUND_MESSAGE
        );
    }

    #[test]
    fn test_other_statuses_share_generic_message() {
        for status in [400, 401, 403, 410, 418, 429, 500, 502, 503] {
            let err = RosterError::from_status(status);
            assert_eq!(err, RosterError::LoadFailed { status });
            assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE, "status {}", status);
        }
    }

    #[test]
    fn test_transport_message_passthrough() {
        let err = RosterError::Transport(Some("connection refused".into()));
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_transport_without_message_uses_fallback() {
        assert_eq!(
            RosterError::Transport(None).user_message(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            RosterError::Transport(Some("  ".into())).user_message(),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_display_is_technical() {
        let err = RosterError::LoadFailed { status: 503 };
        assert_eq!(err.to_string(), "roster endpoint returned 503");
    }
}
