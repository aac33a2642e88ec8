// TUI application state
//
// App owns the mounted roster view model plus everything around it: the
// panel cursor, the toast slot, the injected clipboard and the theme.
// The event loop calls tick() for time-driven updates and handle_key() for
// input; ui::draw reads the rest.

use super::components::{RosterPanel, ToastSlot};
use super::theme::Theme;
use super::traits::{Handled, Interactive};
use crate::logging::LogBuffer;
use crate::roster::{copy_line_id, ClipboardWriter, CopyOutcome, RosterSource, RosterViewModel};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::sync::Arc;

/// Main application state for the TUI
pub struct App {
    /// Roster fetch lifecycle (mounted for the lifetime of the App)
    pub view_model: RosterViewModel,

    /// Mentor cursor and panel rendering
    pub panel: RosterPanel,

    /// Copy confirmations
    pub toast: ToastSlot,

    /// Where copied Line IDs go
    clipboard: Box<dyn ClipboardWriter>,

    /// Current color theme
    pub theme: Theme,

    /// Roster endpoint, shown in the status bar
    pub endpoint: String,

    /// Log buffer for the status bar's last-log line
    pub log_buffer: LogBuffer,

    /// Animation frame counter for the spinner
    pub animation_frame: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Mount the roster view model and build the app around it
    pub fn new(
        source: Arc<dyn RosterSource>,
        clipboard: Box<dyn ClipboardWriter>,
        theme: Theme,
        endpoint: String,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            view_model: RosterViewModel::mount(source),
            panel: RosterPanel::new(),
            toast: ToastSlot::default(),
            clipboard,
            theme,
            endpoint,
            log_buffer,
            animation_frame: 0,
            should_quit: false,
        }
    }

    /// Periodic update: settle the fetch, expire toasts, advance spinner
    pub fn tick(&mut self) {
        self.view_model.poll();
        self.panel.sync(self.view_model.state());
        self.toast.expire();
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Copy the selected mentor's Line ID
    ///
    /// Returns None when there is no row to copy from.
    pub fn copy_selected(&mut self) -> Option<CopyOutcome> {
        let line_id = self.panel.selected_line_id(self.view_model.state())?;
        Some(copy_line_id(
            line_id,
            self.clipboard.as_ref(),
            &mut self.toast,
        ))
    }

    /// Layered dispatch: global keys first, then the roster panel
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.kind != KeyEventKind::Press {
            return Handled::No;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                Handled::Yes
            }
            KeyCode::Char('y') | KeyCode::Char('c') | KeyCode::Enter => {
                self.copy_selected().is_some().into()
            }
            _ => self.panel.handle_key(key),
        }
    }

    /// Tear down the mount before the terminal is restored
    pub fn shutdown(&mut self) {
        self.view_model.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::clipboard::COPY_SUCCESS_MESSAGE;
    use crate::roster::{FetchFuture, Mentor, Roster, RosterError, RosterState};
    use crate::tui::components::toast::ToastKind;
    use crossterm::event::KeyModifiers;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedSource(Result<Roster, RosterError>);

    impl RosterSource for FixedSource {
        fn fetch(&self) -> FetchFuture {
            futures::future::ready(self.0.clone()).boxed()
        }
    }

    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<Vec<String>>>);

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&self, text: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn loaded_app(clipboard: SharedClipboard) -> App {
        let roster = Roster {
            mentors: vec![Mentor::new("A", "L1"), Mentor::new("B", "L2")],
            mentees: vec!["X".into(), "Y".into()],
        };
        let mut app = App::new(
            Arc::new(FixedSource(Ok(roster))),
            Box::new(clipboard),
            Theme::default(),
            "http://test".into(),
            LogBuffer::new(),
        );
        app.view_model.settle().await;
        app.tick();
        app
    }

    #[tokio::test]
    async fn test_copy_second_row() {
        let clipboard = SharedClipboard::default();
        let mut app = loaded_app(clipboard.clone()).await;
        let before = app.view_model.state().clone();

        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.handle_key(press(KeyCode::Char('y'))), Handled::Yes);

        assert_eq!(*clipboard.0.borrow(), vec!["L2".to_string()]);
        let toast = app.toast.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, COPY_SUCCESS_MESSAGE);

        // Copy never touches the view model
        assert_eq!(app.view_model.state(), &before);
    }

    #[tokio::test]
    async fn test_copy_without_roster_is_ignored() {
        let clipboard = SharedClipboard::default();
        let mut app = App::new(
            Arc::new(FixedSource(Err(RosterError::NotFound))),
            Box::new(clipboard.clone()),
            Theme::default(),
            "http://test".into(),
            LogBuffer::new(),
        );
        app.view_model.settle().await;
        app.tick();

        assert!(matches!(app.view_model.state(), RosterState::Error(_)));
        assert_eq!(app.handle_key(press(KeyCode::Enter)), Handled::No);
        assert!(clipboard.0.borrow().is_empty());
        assert!(app.toast.current().is_none());
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = loaded_app(SharedClipboard::default()).await;
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_shutdown_unmounts() {
        let mut app = loaded_app(SharedClipboard::default()).await;
        app.shutdown();
        assert!(!app.view_model.is_mounted());
    }
}
