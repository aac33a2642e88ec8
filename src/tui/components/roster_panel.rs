//! Roster panel component
//!
//! Draws the [`Screen`] built from the view model's state:
//! - Loading: delegates to [`LoadingIndicator`]
//! - Error: illustration plus the message
//! - Loaded: "Mentor" table (name | Line ID ⧉) and "Mentee" list
//!
//! The panel owns only UI state (the mentor cursor and the mentee scroll
//! position). It never touches the view model; copying goes through the App,
//! which holds the clipboard and the toast slot.

use super::loading::LoadingIndicator;
use crate::roster::view::{self, MenteeRow, MentorRow, Screen, MENTEE_HEADER, MENTOR_HEADER};
use crate::roster::RosterState;
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, TableState},
    Frame,
};
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker drawn next to each Line ID
const COPY_MARKER: &str = "⧉";

/// Roster panel with a mentor selection cursor and a scrollable mentee list
///
/// Mentors scroll with the cursor (the table keeps the selection in view);
/// mentees have no cursor, so they scroll on their own.
#[derive(Debug, Default)]
pub struct RosterPanel {
    /// Selected mentor row (None = nothing to select)
    pub selected: Option<usize>,

    /// Mentor count from the last sync (for bounds checking)
    mentor_count: usize,

    /// Mentee count from the last sync
    mentee_count: usize,

    /// Mentee section scroll position
    mentees: ScrollState,
}

impl RosterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the cursor with the current state (call each tick)
    pub fn sync(&mut self, state: &RosterState) {
        self.mentor_count = state.roster().map_or(0, |r| r.mentors.len());
        self.mentee_count = state.roster().map_or(0, |r| r.mentees.len());
        self.selected = match (self.selected, self.mentor_count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), count) => Some(idx.min(count - 1)),
        };
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some((idx + 1).min(self.mentor_count.saturating_sub(1)));
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        }
    }

    pub fn select_first(&mut self) {
        if self.selected.is_some() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if self.selected.is_some() {
            self.selected = self.mentor_count.checked_sub(1);
        }
    }

    /// Sync the mentee viewport with the area the panel is about to draw into
    ///
    /// Called from the draw pass, the only place that knows the real height.
    pub fn sync_viewport(&mut self, area: Rect) {
        let [_, mentee_area] = sections(content_area(area), self.mentor_count);
        // One row goes to the section header
        let viewport = mentee_area.height.saturating_sub(1) as usize;
        self.mentees.update_dimensions(self.mentee_count, viewport);
    }

    /// Line ID under the cursor, if the roster is loaded
    pub fn selected_line_id<'s>(&self, state: &'s RosterState) -> Option<&'s str> {
        let roster = state.roster()?;
        let mentor = roster.mentors.get(self.selected?)?;
        Some(mentor.line_id.as_str())
    }

    fn render_error(&self, f: &mut Frame, area: Rect, art: &str, message: &str, theme: &Theme) {
        let mut lines: Vec<Line> = art
            .trim_start_matches('\n')
            .lines()
            .map(|l| Line::styled(l.to_string(), Style::default().fg(theme.muted)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(
            message.to_string(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ));

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(area);

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }

    fn render_roster(
        &self,
        f: &mut Frame,
        area: Rect,
        mentors: &[MentorRow],
        mentees: &[MenteeRow],
        theme: &Theme,
    ) {
        let [mentor_area, mentee_area] = sections(area, mentors.len());

        let header_style = Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD);

        // ─── Mentor section ──────────────────────────────────
        let mentor_block = Block::default()
            .title(Span::styled(MENTOR_HEADER, header_style))
            .borders(Borders::NONE);
        let inner_width = mentor_area.width.saturating_sub(2);
        // 2fr name, 1fr Line ID
        let name_width = inner_width * 2 / 3;

        let rows: Vec<Row> = mentors
            .iter()
            .map(|row| mentor_row(row, name_width.saturating_sub(1), theme))
            .collect();

        let table = Table::new(rows, [Constraint::Fill(2), Constraint::Fill(1)])
            .block(mentor_block)
            .column_spacing(1)
            .row_highlight_style(
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut table_state = TableState::default().with_selected(self.selected);
        f.render_stateful_widget(table, mentor_area, &mut table_state);

        // ─── Mentee section ──────────────────────────────────
        let (start, end) = self.mentees.visible_range();
        let mut title = vec![Span::styled(MENTEE_HEADER, header_style)];
        if self.mentees.overflows() {
            title.push(Span::styled(
                format!(" {}-{} of {}", start + 1, end, mentees.len()),
                Style::default().fg(theme.muted),
            ));
        }
        let mentee_block = Block::default()
            .title(Line::from(title))
            .borders(Borders::NONE);
        let items: Vec<ListItem> = mentees
            .get(start..end)
            .unwrap_or(mentees)
            .iter()
            .map(|row| mentee_item(row, mentee_area.width.saturating_sub(2), theme))
            .collect();

        f.render_widget(List::new(items).block(mentee_block), mentee_area);
    }
}

/// Panel content area: inside the border with one cell of side padding
fn content_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    }
}

/// Split the content area into mentor and mentee sections
///
/// Mentors get their header and rows plus a spacer; mentees take the rest
/// but always keep room for a header and two rows.
fn sections(area: Rect, mentor_count: usize) -> [Rect; 2] {
    let mentor_height = u16::try_from(mentor_count)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    Layout::vertical([Constraint::Max(mentor_height), Constraint::Min(3)]).areas(area)
}

/// Render one mentor row; depends only on its arguments
fn mentor_row<'a>(row: &MentorRow<'a>, name_width: u16, theme: &Theme) -> Row<'a> {
    let line_id = Line::from(vec![
        Span::styled(row.line_id, Style::default().fg(theme.line_id)),
        Span::raw(" "),
        Span::styled(COPY_MARKER, Style::default().fg(theme.muted)),
    ]);

    Row::new(vec![
        Line::styled(
            fit(row.name, name_width as usize).into_owned(),
            Style::default().fg(theme.foreground),
        ),
        line_id,
    ])
}

/// Render one mentee row; depends only on its arguments
fn mentee_item<'a>(row: &MenteeRow<'a>, width: u16, theme: &Theme) -> ListItem<'a> {
    ListItem::new(format!("  {}", fit(row.name, width as usize)))
        .style(Style::default().fg(theme.foreground))
}

/// Truncate to a display width, marking the cut with an ellipsis
fn fit(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for RosterPanel {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Group ",
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(block, area);
        let inner = content_area(area);

        match view::screen(ctx.roster) {
            Screen::Loading => LoadingIndicator.render(f, inner, ctx),
            Screen::Error { art, message } => self.render_error(f, inner, art, message, theme),
            Screen::Roster { mentors, mentees } => {
                self.render_roster(f, inner, &mentors, &mentees, theme)
            }
        }
    }
}

impl Interactive for RosterPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select_first();
                Handled::Yes
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.select_last();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.mentees.page_down();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.mentees.page_up();
                Handled::Yes
            }
            KeyCode::Char('J') => {
                self.mentees.scroll_down();
                Handled::Yes
            }
            KeyCode::Char('K') => {
                self.mentees.scroll_up();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match (self.selected.is_some(), self.mentees.overflows()) {
            (true, true) => Some("↑↓:select  y/Enter:copy Line ID  PgUp/PgDn:mentees  q:quit"),
            (true, false) => Some("↑↓:select  y/Enter:copy Line ID  q:quit"),
            (false, true) => Some("PgUp/PgDn:mentees  q:quit"),
            (false, false) => Some("q:quit"),
        }
    }
}
