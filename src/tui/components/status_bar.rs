// Status bar component
//
// Renders endpoint, roster summary, key hints and the most recent log line.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusBar<'a> {
    /// Roster endpoint URL
    pub endpoint: &'a str,

    /// Hint from the focused component
    pub hint: Option<&'static str>,

    /// Latest captured log entry
    pub last_log: Option<&'a LogEntry>,
}

impl Component for StatusBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let muted = Style::default().fg(theme.muted);

        let mut spans = vec![
            Span::styled(format!(" {} ", self.endpoint), muted),
            Span::styled("│ ", muted),
            Span::styled(
                ctx.roster.summary(),
                Style::default().fg(theme.foreground),
            ),
        ];
        if let Some(hint) = self.hint {
            spans.push(Span::styled(" │ ", muted));
            spans.push(Span::styled(hint, muted));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(entry) = self.last_log {
            let color = match entry.level {
                LogLevel::Error => theme.error,
                LogLevel::Warn => theme.title,
                _ => theme.muted,
            };
            lines.push(Line::styled(
                format!(
                    " {} {:5} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.level.as_str(),
                    entry.message
                ),
                Style::default().fg(color),
            ));
        }

        let status = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );

        f.render_widget(status, area);
    }
}
