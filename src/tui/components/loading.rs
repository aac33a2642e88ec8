//! Loading indicator shown while the roster request is in flight
//!
//! Takes no parameters: the spinner frame comes from the render context.

use crate::roster::view::LOADING_LABEL;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct LoadingIndicator;

impl Component for LoadingIndicator {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", ctx.spinner_char()),
                Style::default()
                    .fg(ctx.theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}{}", LOADING_LABEL, ctx.loading_dots()),
                Style::default().fg(ctx.theme.muted),
            ),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
    }
}
