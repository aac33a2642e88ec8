// Theme support for the TUI
//
// A handful of named palettes selected via config ("theme = ...") or the
// ROSTER_THEME env var. "terminal" uses the ANSI palette, the rest true color.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Text ────────────────────────────────────────────────
    pub foreground: Color,
    pub background: Color,
    pub muted: Color,
    pub title: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub border: Color,
    pub highlight: Color,
    pub border_type: BorderType,

    // ─── Selection ───────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── States ──────────────────────────────────────────────
    pub success: Color,
    pub error: Color,
    pub line_id: Color,
}

impl Theme {
    /// Names accepted by `by_name`
    pub const NAMES: [&'static str; 3] = ["Night", "Paper", "Terminal"];

    /// Load theme by name (case-insensitive), unknown names fall back to Night
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "paper" => Self::paper(),
            "terminal" => Self::terminal(),
            _ => Self::night(),
        }
    }

    /// Dark glassy palette, the default
    pub fn night() -> Self {
        Self {
            name: "Night".to_string(),
            foreground: Color::Rgb(0xf2, 0xf2, 0xf2),
            background: Color::Rgb(0x10, 0x10, 0x1a),
            muted: Color::Rgb(0x7a, 0x7a, 0x8c),
            title: Color::Rgb(0xc3, 0xb1, 0xe1), // lavender
            border: Color::Rgb(0x4a, 0x4a, 0x5e),
            highlight: Color::Rgb(0xff, 0xff, 0xff),
            border_type: BorderType::Rounded,
            selection: Color::Rgb(0x33, 0x33, 0x4d),
            selection_fg: Color::Rgb(0xff, 0xff, 0xff),
            success: Color::Rgb(0x7e, 0xd9, 0x9b),
            error: Color::Rgb(0xff, 0x7a, 0x85),
            line_id: Color::Rgb(0x9a, 0xd1, 0xff),
        }
    }

    /// Light palette for bright terminals
    pub fn paper() -> Self {
        Self {
            name: "Paper".to_string(),
            foreground: Color::Rgb(0x22, 0x22, 0x22),
            background: Color::Rgb(0xfa, 0xf8, 0xf2),
            muted: Color::Rgb(0x8a, 0x84, 0x78),
            title: Color::Rgb(0x5b, 0x3f, 0x8c),
            border: Color::Rgb(0xc8, 0xc2, 0xb4),
            highlight: Color::Rgb(0x22, 0x22, 0x22),
            border_type: BorderType::Plain,
            selection: Color::Rgb(0xe4, 0xdc, 0xf2),
            selection_fg: Color::Rgb(0x22, 0x22, 0x22),
            success: Color::Rgb(0x2e, 0x7d, 0x32),
            error: Color::Rgb(0xc6, 0x28, 0x28),
            line_id: Color::Rgb(0x15, 0x65, 0xc0),
        }
    }

    /// Uses the terminal's own ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            foreground: Color::Reset,
            background: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Magenta,
            border: Color::Gray,
            highlight: Color::White,
            border_type: BorderType::Plain,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            success: Color::Green,
            error: Color::Red,
            line_id: Color::Cyan,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("PAPER").name, "Paper");
        assert_eq!(Theme::by_name("terminal").name, "Terminal");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Theme::by_name("dracula").name, "Night");
    }

    #[test]
    fn test_all_names_resolve_to_themselves() {
        for name in Theme::NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }
}
