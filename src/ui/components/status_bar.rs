//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::constants::SIGNED_OUT_HINT;
use crate::ui::theme::Palette;

const SIGNED_IN_HINT: &str = "a: add • e: due date • K/J: move • c: complete • d: delete • r: refresh • t: theme • L: sign out • ?: help • q: quit";

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render key hints, or the running operation while one is in flight
    pub fn render(f: &mut Frame, area: Rect, signed_in: bool, busy: Option<&str>, palette: &Palette) {
        let (status_text, status_color) = match busy {
            Some(description) => (format!("⟳ {}...", description), palette.accent),
            None if signed_in => (SIGNED_IN_HINT.to_string(), palette.muted),
            None => (SIGNED_OUT_HINT.to_string(), palette.muted),
        };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
