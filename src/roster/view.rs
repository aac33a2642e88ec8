//! Pure rendering of the roster state
//!
//! [`screen`] turns a [`RosterState`] into a [`Screen`]: a description of
//! what is on the panel, with one keyed row per mentor and mentee. The TUI
//! and the headless printer both draw from it, so neither needs to know how
//! the state is shaped.
//!
//! Row keys are derived from content plus position. Two mentors with the
//! same name but different Line IDs (or the same pair twice) never share a
//! key, and an unchanged row keeps its key across renders.

use super::{Mentor, RosterState};
use std::fmt;
use unicode_width::UnicodeWidthStr;

pub const MENTOR_HEADER: &str = "Mentor";
pub const MENTEE_HEADER: &str = "Mentee";
pub const LOADING_LABEL: &str = "Loading roster";

/// Shown above the error message: a cat sitting in an empty box
pub const ERROR_ART: &str = r"
   /\_/\
  ( o.o )
 ┌─> ^ <─┐
 │       │
 └───────┘";

/// Stable identity of a rendered row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey(String);

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One mentor line: name and Line ID side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorRow<'a> {
    pub key: RowKey,
    pub index: usize,
    pub name: &'a str,
    pub line_id: &'a str,
}

/// One mentee line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenteeRow<'a> {
    pub key: RowKey,
    pub index: usize,
    pub name: &'a str,
}

/// What the roster panel shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Only the loading indicator
    Loading,
    /// Illustration plus the literal message, no retry
    Error {
        art: &'static str,
        message: &'a str,
    },
    /// Both sections, headers always present
    Roster {
        mentors: Vec<MentorRow<'a>>,
        mentees: Vec<MenteeRow<'a>>,
    },
}

pub fn mentor_row(index: usize, mentor: &Mentor) -> MentorRow<'_> {
    MentorRow {
        key: RowKey(format!("{}-{}-{}", mentor.name, mentor.line_id, index)),
        index,
        name: &mentor.name,
        line_id: &mentor.line_id,
    }
}

pub fn mentee_row(index: usize, mentee: &str) -> MenteeRow<'_> {
    MenteeRow {
        key: RowKey(format!("{}-{}", mentee, index)),
        index,
        name: mentee,
    }
}

/// Build the screen for a state
pub fn screen(state: &RosterState) -> Screen<'_> {
    match state {
        RosterState::Loading => Screen::Loading,
        RosterState::Error(message) => Screen::Error {
            art: ERROR_ART,
            message,
        },
        RosterState::Loaded(roster) => Screen::Roster {
            mentors: roster
                .mentors
                .iter()
                .enumerate()
                .map(|(i, m)| mentor_row(i, m))
                .collect(),
            mentees: roster
                .mentees
                .iter()
                .enumerate()
                .map(|(i, m)| mentee_row(i, m))
                .collect(),
        },
    }
}

impl Screen<'_> {
    #[cfg(test)]
    pub fn mentor_rows(&self) -> &[MentorRow<'_>] {
        match self {
            Screen::Roster { mentors, .. } => mentors,
            _ => &[],
        }
    }

    #[cfg(test)]
    pub fn mentee_rows(&self) -> &[MenteeRow<'_>] {
        match self {
            Screen::Roster { mentees, .. } => mentees,
            _ => &[],
        }
    }

    /// Plain-text rendering for headless output
    pub fn to_plain_text(&self) -> String {
        match self {
            Screen::Loading => format!("{}...", LOADING_LABEL),
            Screen::Error { art, message } => {
                format!("{}\n\n{}", art.trim_start_matches('\n'), message)
            }
            Screen::Roster { mentors, mentees } => {
                let name_width = mentors
                    .iter()
                    .map(|row| row.name.width())
                    .max()
                    .unwrap_or(0);

                let mut out = String::new();
                out.push_str(MENTOR_HEADER);
                out.push('\n');
                for row in mentors {
                    let pad = name_width - row.name.width();
                    out.push_str(&format!(
                        "  {}{}  {}\n",
                        row.name,
                        " ".repeat(pad),
                        row.line_id
                    ));
                }
                out.push('\n');
                out.push_str(MENTEE_HEADER);
                out.push('\n');
                for row in mentees {
                    out.push_str(&format!("  {}\n", row.name));
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use std::collections::HashSet;

    fn loaded(mentors: Vec<Mentor>, mentees: &[&str]) -> RosterState {
        RosterState::Loaded(Roster {
            mentors,
            mentees: mentees.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_rows_keep_payload_order() {
        let state = loaded(
            vec![Mentor::new("A", "L1"), Mentor::new("B", "L2")],
            &["X", "Y"],
        );
        let screen = screen(&state);

        let mentors: Vec<_> = screen
            .mentor_rows()
            .iter()
            .map(|r| (r.name, r.line_id))
            .collect();
        assert_eq!(mentors, vec![("A", "L1"), ("B", "L2")]);

        let mentees: Vec<_> = screen.mentee_rows().iter().map(|r| r.name).collect();
        assert_eq!(mentees, vec!["X", "Y"]);
    }

    #[test]
    fn test_empty_lists_render_headers_only() {
        let state = loaded(vec![], &[]);
        let screen = screen(&state);
        assert!(screen.mentor_rows().is_empty());
        assert!(screen.mentee_rows().is_empty());

        let text = screen.to_plain_text();
        assert_eq!(text, "Mentor\n\nMentee\n");
    }

    #[test]
    fn test_keys_distinguish_duplicate_names() {
        let state = loaded(
            vec![
                Mentor::new("Sam", "sam-1"),
                Mentor::new("Sam", "sam-2"),
                Mentor::new("Sam", "sam-1"),
            ],
            &["Kim", "Kim"],
        );
        let screen = screen(&state);

        let mentor_keys: HashSet<_> = screen.mentor_rows().iter().map(|r| &r.key).collect();
        assert_eq!(mentor_keys.len(), 3);
        let mentee_keys: HashSet<_> = screen.mentee_rows().iter().map(|r| &r.key).collect();
        assert_eq!(mentee_keys.len(), 2);
    }

    #[test]
    fn test_keys_are_stable_across_renders() {
        let state = loaded(vec![Mentor::new("A", "L1")], &["X"]);
        let first = screen(&state);
        let second = screen(&state);
        assert_eq!(first, second);
        assert_eq!(first.mentor_rows()[0].key.to_string(), "A-L1-0");
        assert_eq!(first.mentee_rows()[0].key.to_string(), "X-0");
    }

    #[test]
    fn test_error_screen_has_no_rows() {
        let state = RosterState::Error("Group not found".into());
        let screen = screen(&state);
        assert_eq!(
            screen,
            Screen::Error {
                art: ERROR_ART,
                message: "Group not found"
            }
        );
        assert!(screen.mentor_rows().is_empty());
        assert!(screen.to_plain_text().ends_with("\n\nGroup not found"));
    }

    #[test]
    fn test_loading_screen() {
        assert_eq!(screen(&RosterState::Loading), Screen::Loading);
        assert_eq!(Screen::Loading.to_plain_text(), "Loading roster...");
    }

    #[test]
    fn test_plain_text_aligns_line_ids() {
        let state = loaded(
            vec![Mentor::new("Al", "L1"), Mentor::new("Beatrice", "L2")],
            &["X"],
        );
        let text = screen(&state).to_plain_text();
        assert_eq!(
            text,
            "Mentor\n  Al        L1\n  Beatrice  L2\n\nMentee\n  X\n"
        );
    }
}
