// Screen layout - called on every frame
//
// ┌──────────── Group ────────────┐
// │ roster panel                  │
// └───────────────────────────────┘
// ─ status bar ────────────────────
//                          [toast]

use super::app::App;
use super::components::StatusBar;
use super::traits::{Component, Interactive, RenderContext};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let [content, footer] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).areas(f.area());

    // Sync scroll dimensions with the real viewport before rendering
    app.panel.sync_viewport(content);

    let ctx = RenderContext::new(&app.theme, app.animation_frame, app.view_model.state());

    app.panel.render(f, content, &ctx);

    let last_log = app.log_buffer.latest();
    StatusBar {
        endpoint: &app.endpoint,
        hint: app.panel.focus_hint(),
        last_log: last_log.as_ref(),
    }
    .render(f, footer, &ctx);

    if let Some(toast) = app.toast.current() {
        toast.render(f, f.area(), &ctx);
    }
}
