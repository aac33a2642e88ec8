// Headless mode - fetch once and print the roster as plain text
//
// Used when stdout is not a terminal we own (scripts, CI) or when the TUI is
// disabled. Logs go to stderr so stdout carries only the roster.

use crate::roster::{view, RosterSource, RosterState, RosterViewModel};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

/// Mount the roster, wait for it to settle and write the rendered screen
///
/// Returns true when the roster loaded, false when the error view was shown.
pub async fn run<W: Write>(source: Arc<dyn RosterSource>, out: &mut W) -> Result<bool> {
    let mut view_model = RosterViewModel::mount(source);
    let state = view_model.settle().await;

    writeln!(out, "{}", view::screen(state).to_plain_text())?;
    out.flush()?;

    let loaded = matches!(state, RosterState::Loaded(_));
    view_model.unmount();
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::error::NOT_FOUND_MESSAGE;
    use crate::roster::{FetchFuture, Mentor, Roster, RosterError};
    use futures::FutureExt;

    struct FixedSource(Result<Roster, RosterError>);

    impl RosterSource for FixedSource {
        fn fetch(&self) -> FetchFuture {
            let outcome = self.0.clone();
            async move { outcome }.boxed()
        }
    }

    #[tokio::test]
    async fn test_prints_loaded_roster() {
        let roster = Roster {
            mentors: vec![Mentor::new("Budi", "budi.line")],
            mentees: vec!["Citra".into()],
        };
        let mut out = Vec::new();

        let loaded = run(Arc::new(FixedSource(Ok(roster))), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(loaded);
        assert!(text.contains("Budi"));
        assert!(text.contains("budi.line"));
        assert!(text.contains("Citra"));
    }

    #[tokio::test]
    async fn test_prints_error_view() {
        let mut out = Vec::new();

        let loaded = run(Arc::new(FixedSource(Err(RosterError::NotFound))), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!loaded);
        assert!(text.contains(NOT_FOUND_MESSAGE));
        assert!(text.contains("( o.o )"));
    }
}
