use super::common::{create_dialog_block, create_input_paragraph, shortcut_hints, shortcuts};
use super::input::InputField;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Which field of the task creation dialog has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskField {
    #[default]
    Title,
    Deadline,
}

impl TaskField {
    pub fn toggle(self) -> Self {
        match self {
            TaskField::Title => TaskField::Deadline,
            TaskField::Deadline => TaskField::Title,
        }
    }
}

pub(super) fn render_error_line(f: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let paragraph = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

pub fn render_task_creation_dialog(
    f: &mut Frame,
    area: Rect,
    title: &InputField,
    deadline: &InputField,
    focus: TaskField,
    error: Option<&str>,
) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 15, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block("New Task", Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Deadline input
            Constraint::Length(1), // Validation error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    f.render_widget(main_block, dialog_area);
    f.render_widget(
        create_input_paragraph(&title.text, "Title", focus == TaskField::Title),
        chunks[0],
    );
    f.render_widget(
        create_input_paragraph(&deadline.text, "Due date (YYYY-MM-DD)", focus == TaskField::Deadline),
        chunks[1],
    );
    render_error_line(f, chunks[2], error);
    f.render_widget(
        shortcut_hints(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::TAB_SWITCH,
            shortcuts::ESC_CANCEL,
        ]),
        chunks[4],
    );
}

pub fn render_deadline_edit_dialog(
    f: &mut Frame,
    area: Rect,
    task_title: &str,
    deadline: &InputField,
    error: Option<&str>,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 11, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block("Change Due Date", Color::Yellow);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Task title
            Constraint::Length(3), // Deadline input
            Constraint::Length(1), // Validation error
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let task_line = Paragraph::new(Line::from(Span::styled(
        task_title.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(main_block, dialog_area);
    f.render_widget(task_line, chunks[0]);
    f.render_widget(
        create_input_paragraph(&deadline.text, "Due date (YYYY-MM-DD)", true),
        chunks[1],
    );
    render_error_line(f, chunks[2], error);
    f.render_widget(
        shortcut_hints(&[shortcuts::ENTER_SUBMIT, shortcuts::ESC_CANCEL]),
        chunks[3],
    );
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, task_title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block("Delete Task", Color::Red);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let message = Paragraph::new(format!("Delete \"{}\"?", task_title))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(main_block, dialog_area);
    f.render_widget(message, chunks[0]);
    f.render_widget(
        shortcut_hints(&[shortcuts::Y_CONFIRM, shortcuts::N_KEEP]),
        chunks[1],
    );
}
