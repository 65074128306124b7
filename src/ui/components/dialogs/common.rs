//! Building blocks shared by every dialog.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

/// Rounded, bordered frame titled in the dialog's accent color
pub fn create_dialog_block<'a>(title: &'a str, accent: Color) -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(title.bold().fg(accent))
        .fg(accent)
}

/// Single-line text input. The focused field gets a block cursor and a bright border.
pub fn create_input_paragraph(text: &str, label: &str, focused: bool) -> Paragraph<'static> {
    let (frame_color, cursor) = if focused {
        (Color::White, "█")
    } else {
        (Color::DarkGray, "")
    };

    Paragraph::new(format!("{text}{cursor}")).white().block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {label} "))
            .fg(frame_color),
    )
}

/// A key hint such as `Enter Submit`
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub key: &'static str,
    pub color: Color,
    pub label: &'static str,
}

/// Centered line of key hints separated by bullets
pub fn shortcut_hints(hints: &[Shortcut]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(hint.label, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

pub mod shortcuts {
    use super::Shortcut;
    use ratatui::style::Color;

    const fn hint(key: &'static str, color: Color, label: &'static str) -> Shortcut {
        Shortcut { key, color, label }
    }

    pub const ENTER_SUBMIT: Shortcut = hint("Enter", Color::Green, " Submit");
    pub const ESC_CANCEL: Shortcut = hint("Esc", Color::Red, " Cancel");
    pub const TAB_SWITCH: Shortcut = hint("Tab", Color::Cyan, " Switch field");
    pub const Y_CONFIRM: Shortcut = hint("y", Color::Green, " Delete");
    pub const N_KEEP: Shortcut = hint("n", Color::Red, " Keep");
}
