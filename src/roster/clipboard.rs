//! Copy a mentor's Line ID and tell the user about it
//!
//! Both the clipboard and the notification surface are injected, so the
//! action itself holds no state and touches nothing but its arguments.

use anyhow::Result;

/// Toast text after a successful copy
pub const COPY_SUCCESS_MESSAGE: &str = "Line ID copied to clipboard!";

/// Toast text when the clipboard rejected the write
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy Line ID";

/// Write access to a clipboard
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// User-visible notifications (toasts)
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
}

/// Result of a copy action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Copy `line_id` verbatim and raise exactly one notification
///
/// A failed write raises a failure toast instead of a success one.
pub fn copy_line_id(
    line_id: &str,
    clipboard: &dyn ClipboardWriter,
    notifier: &mut dyn Notifier,
) -> CopyOutcome {
    match clipboard.write_text(line_id) {
        Ok(()) => {
            tracing::debug!("Copied Line ID ({} chars)", line_id.chars().count());
            notifier.success(COPY_SUCCESS_MESSAGE);
            CopyOutcome::Copied
        }
        Err(e) => {
            tracing::warn!("Clipboard write failed: {:#}", e);
            notifier.failure(COPY_FAILURE_MESSAGE);
            CopyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: RefCell<Vec<String>>,
        broken: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.broken {
                anyhow::bail!("no display server");
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: Vec<String>,
        failures: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn failure(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    #[test]
    fn test_copies_exact_line_id_with_one_toast() {
        for line_id in ["L1", "@mentor.b", " spaced id ", "ライン"] {
            let clipboard = RecordingClipboard::default();
            let mut notifier = RecordingNotifier::default();

            let outcome = copy_line_id(line_id, &clipboard, &mut notifier);

            assert_eq!(outcome, CopyOutcome::Copied);
            assert_eq!(*clipboard.writes.borrow(), vec![line_id.to_string()]);
            assert_eq!(notifier.successes, vec![COPY_SUCCESS_MESSAGE]);
            assert!(notifier.failures.is_empty());
        }
    }

    #[test]
    fn test_failed_write_does_not_claim_success() {
        let clipboard = RecordingClipboard {
            broken: true,
            ..Default::default()
        };
        let mut notifier = RecordingNotifier::default();

        let outcome = copy_line_id("L1", &clipboard, &mut notifier);

        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(notifier.successes.is_empty());
        assert_eq!(notifier.failures, vec![COPY_FAILURE_MESSAGE]);
    }
}
