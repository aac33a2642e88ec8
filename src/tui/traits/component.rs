//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.

use crate::roster::RosterState;
use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state,
/// so rendering stays a pure function of this context plus the component.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Animation frame counter (for the loading spinner)
    pub animation_frame: usize,

    /// Current roster state from the view model
    pub roster: &'a RosterState,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, animation_frame: usize, roster: &'a RosterState) -> Self {
        Self {
            theme,
            animation_frame,
            roster,
        }
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Get animated dots for the loading label
    pub fn loading_dots(&self) -> &'static str {
        const DOTS: [&str; 4] = ["", ".", "..", "..."];
        DOTS[self.animation_frame % DOTS.len()]
    }
}

/// Base trait for all UI components
pub trait Component {
    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let theme = Theme::default();
        let state = RosterState::Loading;
        let chars: Vec<char> = (0..5)
            .map(|frame| RenderContext::new(&theme, frame, &state).spinner_char())
            .collect();
        assert_eq!(chars, vec!['◐', '◓', '◑', '◒', '◐']);
    }
}
