//! Modal dialog component.
//!
//! Hosts every modal the app shows over the task lists: sign-in, new task,
//! due date change, delete confirmation, help and logs. Input dialogs keep
//! their text in [`InputField`]s and only emit an action on submit; dates are
//! parsed here so a typo keeps the dialog open with an inline message instead
//! of reaching the task store.

use crate::constants::ERROR_INVALID_DATE_INPUT;
use crate::logger::Logger;
use crate::tasks::Rejection;
use crate::ui::components::dialogs::{system_dialogs, task_dialogs, InputField, TaskField};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    /// Credential, task title, or the due date being edited
    pub primary_input: InputField,
    /// Due date of a new task
    pub deadline_input: InputField,
    pub focus: TaskField,
    pub validation_error: Option<String>,
    // Scrolling support for the logs dialog
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            primary_input: InputField::default(),
            deadline_input: InputField::default(),
            focus: TaskField::Title,
            validation_error: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.primary_input.clear();
        self.deadline_input.clear();
        self.focus = TaskField::Title;
        self.validation_error = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Reopen the new task dialog holding a draft the task store refused
    pub fn restore_task_draft(&mut self, title: &str, deadline: Option<NaiveDate>, rejection: &Rejection) {
        self.clear_dialog();
        self.dialog_type = Some(DialogType::TaskCreation);
        self.primary_input = InputField::with_text(title);
        self.deadline_input = InputField::with_text(deadline.map(datetime::format_ymd).unwrap_or_default());
        self.focus = match rejection {
            Rejection::EmptyTitle => TaskField::Title,
            Rejection::MissingDeadline | Rejection::DeadlineInPast { .. } => TaskField::Deadline,
        };
    }

    /// Text pasted while an input dialog is open goes to the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.focused_input() {
            field.insert_str(text);
        }
    }

    fn focused_input(&mut self) -> Option<&mut InputField> {
        match self.dialog_type {
            Some(DialogType::Login) | Some(DialogType::DeadlineEdit { .. }) => Some(&mut self.primary_input),
            Some(DialogType::TaskCreation) => Some(match self.focus {
                TaskField::Title => &mut self.primary_input,
                TaskField::Deadline => &mut self.deadline_input,
            }),
            _ => None,
        }
    }

    /// Parse a typed date, recording an inline error when it does not parse
    fn parse_date_input(&mut self, raw: &str) -> Result<Option<NaiveDate>, ()> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match datetime::parse_date(raw) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                self.validation_error = Some(ERROR_INVALID_DATE_INPUT.to_string());
                Err(())
            }
        }
    }

    fn handle_submit(&mut self) -> Action {
        let action = match self.dialog_type.clone() {
            Some(DialogType::Login) => {
                let credential = self.primary_input.text.trim().to_string();
                if credential.is_empty() {
                    return Action::None;
                }
                Action::Login(credential)
            }
            Some(DialogType::TaskCreation) => {
                let raw = self.deadline_input.text.clone();
                let Ok(deadline) = self.parse_date_input(&raw) else {
                    self.focus = TaskField::Deadline;
                    return Action::None;
                };
                Action::AddTask {
                    title: self.primary_input.text.clone(),
                    deadline,
                }
            }
            Some(DialogType::DeadlineEdit { task_id, .. }) => {
                let raw = self.primary_input.text.clone();
                match self.parse_date_input(&raw) {
                    Ok(Some(deadline)) => Action::UpdateDeadline { task_id, deadline },
                    Ok(None) => {
                        self.validation_error = Some(ERROR_INVALID_DATE_INPUT.to_string());
                        return Action::None;
                    }
                    Err(()) => return Action::None,
                }
            }
            Some(DialogType::DeleteConfirmation { task_id, .. }) => Action::DeleteTask(task_id),
            _ => return Action::HideDialog,
        };
        self.clear_dialog();
        action
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab | KeyCode::BackTab if self.dialog_type == Some(DialogType::TaskCreation) => {
                self.focus = self.focus.toggle();
                Action::None
            }
            code => {
                if let Some(field) = self.focused_input() {
                    if field.handle_key(code) {
                        self.validation_error = None;
                    }
                }
                Action::None
            }
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            None => Action::None,
            Some(DialogType::Login) | Some(DialogType::TaskCreation) | Some(DialogType::DeadlineEdit { .. }) => {
                self.handle_input_key(key)
            }
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.handle_submit(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                    Action::None
                }
                KeyCode::PageUp => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(10);
                    Action::None
                }
                KeyCode::PageDown => {
                    self.scroll_offset = self.scroll_offset.saturating_add(10);
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_offset = 0;
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                // Pre-populate input for edit dialogs
                if let DialogType::DeadlineEdit { current, .. } = &dialog_type {
                    self.primary_input = InputField::with_text(datetime::format_ymd(*current));
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let error = self.validation_error.as_deref();
        match &self.dialog_type {
            None => {}
            Some(DialogType::Login) => system_dialogs::render_login_dialog(f, area, &self.primary_input, error),
            Some(DialogType::TaskCreation) => task_dialogs::render_task_creation_dialog(
                f,
                area,
                &self.primary_input,
                &self.deadline_input,
                self.focus,
                error,
            ),
            Some(DialogType::DeadlineEdit { title, .. }) => {
                task_dialogs::render_deadline_edit_dialog(f, area, title, &self.primary_input, error)
            }
            Some(DialogType::DeleteConfirmation { title, .. }) => {
                task_dialogs::render_delete_confirmation_dialog(f, area, title)
            }
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, area),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, area, &logs, self.scroll_offset, &mut self.scrollbar_state);
            }
        }
    }
}
