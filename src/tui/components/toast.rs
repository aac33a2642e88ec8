//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a short duration.
//! Renders in the bottom-right corner on top of all other content.
//! [`ToastSlot`] is the TUI's [`Notifier`]: a new toast replaces the old one.

use crate::roster::Notifier;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    fn text(&self) -> String {
        let icon = match self.kind {
            ToastKind::Success => '✓',
            ToastKind::Failure => '✗',
        };
        format!("{} {}", icon, self.message)
    }
}

impl Component for Toast {
    /// Uses `Clear` so the toast sits on top of the roster
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let text = self.text();
        let theme = ctx.theme;

        // Add 4 for padding and border
        let width = (text.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        // Bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let accent = match self.kind {
            ToastKind::Success => theme.success,
            ToastKind::Failure => theme.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

/// Holds at most one live toast
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once its time is up (call each tick)
    pub fn expire(&mut self) {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
    }

    fn show(&mut self, kind: ToastKind, message: &str) {
        self.current = Some(Toast::new(kind, message));
    }
}

impl Notifier for ToastSlot {
    fn success(&mut self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn failure(&mut self, message: &str) {
        self.show(ToastKind::Failure, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_replaces_previous_toast() {
        let mut slot = ToastSlot::default();
        slot.failure("first");
        slot.success("second");

        let toast = slot.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "second");
    }

    #[test]
    fn test_expire_keeps_fresh_toast() {
        let mut slot = ToastSlot::default();
        slot.success("copied");
        slot.expire();
        assert!(slot.current().is_some());
    }

    #[test]
    fn test_expire_drops_old_toast() {
        let mut slot = ToastSlot {
            current: Some(Toast {
                kind: ToastKind::Success,
                message: "copied".into(),
                created_at: Instant::now(),
                duration: Duration::ZERO,
            }),
        };
        slot.expire();
        assert!(slot.current().is_none());
    }
}
