use super::common::{create_dialog_block, create_input_paragraph, shortcut_hints, shortcuts};
use super::input::InputField;
use super::task_dialogs::render_error_line;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::state::Notice;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_LINES: &[(&str, &str)] = &[
    ("j / k", "Select next / previous task"),
    ("a", "Add a task"),
    ("e", "Change the selected task's due date"),
    ("K / J", "Move the selected task up / down"),
    ("c / Enter", "Complete the selected task"),
    ("d", "Delete the selected task"),
    ("r", "Reload tasks from the server"),
    ("t", "Toggle dark mode"),
    ("l", "Sign in (when signed out)"),
    ("L", "Sign out"),
    ("G", "Show logs"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

pub fn render_login_dialog(f: &mut Frame, area: Rect, credential: &InputField, error: Option<&str>) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 11, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block("Sign in with Google", Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Hint
            Constraint::Length(3), // Credential input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let hint = Paragraph::new("Paste the ID token issued by Google")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    // Show the tail of long tokens so the cursor stays visible
    let width = chunks[1].width.saturating_sub(3) as usize;
    let char_count = credential.text.chars().count();
    let visible: String = credential.text.chars().skip(char_count.saturating_sub(width)).collect();

    f.render_widget(main_block, dialog_area);
    f.render_widget(hint, chunks[0]);
    f.render_widget(create_input_paragraph(&visible, "ID token", true), chunks[1]);
    render_error_line(f, chunks[2], error);
    f.render_widget(
        shortcut_hints(&[shortcuts::ENTER_SUBMIT, shortcuts::ESC_CANCEL]),
        chunks[3],
    );
}

pub fn render_help_dialog(f: &mut Frame, area: Rect) {
    let height = HELP_LINES.len() as u16 + 4;
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>12}  ", key),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(create_dialog_block("Help - Press 'Esc' or '?' to close", Color::Cyan));

    f.render_widget(help, dialog_area);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    let lines: Vec<&str> = logs_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = logs_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_lines: Vec<&str> = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect();

    let logs_paragraph = Paragraph::new(visible_lines.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_LOGS)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(logs_paragraph, logs_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray));

        f.render_stateful_widget(scrollbar, logs_area, scrollbar_state);
    }
}

/// Modal alert for an error or info notice; any key dismisses it
pub fn render_notice_dialog(f: &mut Frame, area: Rect, icons: &IconService, notice: &Notice) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let (title, color, message) = match notice {
        Notice::Error(message) => (format!("{} Error", icons.error()), Color::Red, message),
        Notice::Info(message) => (format!("{} Info", icons.info()), Color::Green, message),
    };

    let block = create_dialog_block(&title, color);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let message_paragraph = Paragraph::new(message.as_str())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = Paragraph::new("Press any key to continue")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}
