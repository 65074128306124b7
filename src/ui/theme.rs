//! Light and dark color palettes.

use ratatui::style::{Color, Style};

/// Colors used across the UI for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub danger: Color,
    /// Controls that cannot be used, e.g. "move up" on the first task
    pub disabled: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(24, 24, 27),
        foreground: Color::Rgb(228, 228, 231),
        muted: Color::Gray,
        accent: Color::Cyan,
        highlight: Color::Rgb(63, 63, 70),
        success: Color::Green,
        danger: Color::Red,
        disabled: Color::DarkGray,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 250),
        foreground: Color::Rgb(24, 24, 27),
        muted: Color::Rgb(113, 113, 122),
        accent: Color::Blue,
        highlight: Color::Rgb(212, 212, 216),
        success: Color::Rgb(21, 128, 61),
        danger: Color::Rgb(185, 28, 28),
        disabled: Color::DarkGray,
    };

    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }

    /// Base style for a full-screen or panel background
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::LIGHT
    }
}
