//! Group roster: data model plus the fetch/render core
//!
//! The roster panel is built from three pieces:
//! - [`RosterViewModel`]: owns the single fetch and the tri-state result
//! - [`view`]: pure rendering of that result into a [`view::Screen`]
//! - [`copy_line_id`]: the per-row clipboard action
//!
//! The HTTP endpoint, clipboard and notification surfaces are injected
//! through [`RosterSource`], [`ClipboardWriter`] and [`Notifier`].

pub mod clipboard;
pub mod error;
pub mod source;
pub mod view;
pub mod view_model;

pub use clipboard::{copy_line_id, ClipboardWriter, CopyOutcome, Notifier};
pub use error::RosterError;
pub use source::{FetchFuture, HttpRosterSource, RosterSource};
pub use view_model::RosterViewModel;

use serde::{Deserialize, Serialize};

/// A mentor row as delivered by the roster endpoint
///
/// `line_id` is an opaque contact token; it is displayed and copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    #[serde(rename = "lineId")]
    pub line_id: String,
}

#[cfg(test)]
impl Mentor {
    pub fn new(name: impl Into<String>, line_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line_id: line_id.into(),
        }
    }
}

/// Success body of the roster endpoint
///
/// Both lists are required; order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub mentors: Vec<Mentor>,
    pub mentees: Vec<String>,
}

impl Roster {
    /// Parse a success body, reporting shape mismatches as `Malformed`
    pub fn from_json(body: &[u8]) -> Result<Self, RosterError> {
        serde_json::from_slice(body).map_err(|e| RosterError::Malformed(e.to_string()))
    }
}

/// Render state of the roster panel
///
/// Starts as `Loading` and moves exactly once to `Error` or `Loaded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RosterState {
    #[default]
    Loading,
    /// User-facing message
    Error(String),
    Loaded(Roster),
}

impl RosterState {
    /// Convert a settled fetch into its terminal state
    pub fn from_outcome(outcome: Result<Roster, RosterError>) -> Self {
        match outcome {
            Ok(roster) => Self::Loaded(roster),
            Err(err) => Self::Error(err.user_message()),
        }
    }

    /// Whether the fetch has settled (either terminal state)
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn roster(&self) -> Option<&Roster> {
        match self {
            Self::Loaded(roster) => Some(roster),
            _ => None,
        }
    }

    /// Short label for the status bar
    pub fn summary(&self) -> String {
        match self {
            Self::Loading => "loading".to_string(),
            Self::Error(_) => "error".to_string(),
            Self::Loaded(roster) => format!(
                "{} mentor{} · {} mentee{}",
                roster.mentors.len(),
                if roster.mentors.len() == 1 { "" } else { "s" },
                roster.mentees.len(),
                if roster.mentees.len() == 1 { "" } else { "s" },
            ),
        }
    }
}
