use crate::api::{Direction, Task};
use crate::icons::IconService;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::theme::Palette;
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Which move controls a row offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveControls {
    pub up: bool,
    pub down: bool,
}

/// Move controls for the task at `index` in a list of `len` tasks.
///
/// The first task cannot move up and the last cannot move down.
#[must_use]
pub fn move_controls(index: usize, len: usize) -> MoveControls {
    MoveControls {
        up: index > 0 && index < len,
        down: index + 1 < len,
    }
}

/// The due line shown under a task, e.g. `Due: 1/1/2099`
#[must_use]
pub fn due_label(task: &Task, date_format: &str) -> String {
    format!("Due: {}", datetime::format_due(task.deadline, date_format))
}

/// The active task list with per-row controls.
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub palette: Palette,
    pub date_format: String,
    pub title: String,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            palette: Palette::default(),
            date_format: datetime::DEFAULT_DISPLAY_DATE_FORMAT.to_string(),
            title: crate::constants::HEADER_TASKS.to_string(),
        }
    }

    /// Replace the rows, keeping the previously selected task selected if it is still listed
    pub fn update_data(&mut self, tasks: Vec<Task>) {
        let selected_id = self.selected_task().map(|t| t.id.clone());
        self.tasks = tasks;

        if let Some(id) = selected_id {
            if let Some(index) = self.tasks.iter().position(|t| t.id == id) {
                self.selected_index = index;
            }
        }
        self.update_list_state();
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn move_action(&self, direction: Direction) -> Action {
        let Some(task) = self.selected_task() else {
            return Action::None;
        };
        let controls = move_controls(self.selected_index, self.tasks.len());
        let allowed = match direction {
            Direction::Up => controls.up,
            Direction::Down => controls.down,
        };

        if allowed {
            Action::MoveTask {
                task_id: task.id.clone(),
                direction,
            }
        } else {
            Action::None
        }
    }

    fn create_task_list_items(&self) -> Vec<ListItem<'static>> {
        let controls = self.icons.controls();
        let len = self.tasks.len();

        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let moves = move_controls(index, len);
                let enabled = |on: bool, color| {
                    if on {
                        Style::default().fg(color)
                    } else {
                        Style::default().fg(self.palette.disabled)
                    }
                };

                let title_line = Line::from(vec![
                    Span::styled(
                        format!("{} ", self.icons.task_pending()),
                        Style::default().fg(self.palette.muted),
                    ),
                    Span::styled(
                        task.title.clone(),
                        Style::default().fg(self.palette.foreground).add_modifier(Modifier::BOLD),
                    ),
                ]);

                let detail_line = Line::from(vec![
                    Span::styled(
                        format!("  {}  ", due_label(task, &self.date_format)),
                        Style::default().fg(self.palette.muted),
                    ),
                    Span::raw("["),
                    Span::styled(controls.move_up, enabled(moves.up, self.palette.accent)),
                    Span::raw("] ["),
                    Span::styled(controls.move_down, enabled(moves.down, self.palette.accent)),
                    Span::raw("] ["),
                    Span::styled(controls.complete, Style::default().fg(self.palette.success)),
                    Span::raw("] ["),
                    Span::styled(controls.delete, Style::default().fg(self.palette.danger)),
                    Span::raw("]"),
                ]);

                ListItem::new(vec![title_line, detail_line])
            })
            .collect()
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Char('K') => self.move_action(Direction::Up),
            KeyCode::Char('J') => self.move_action(Direction::Down),
            KeyCode::Enter | KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.selected_task() {
                    Some(task) => Action::CompleteTask(task.id.clone()),
                    None => Action::None,
                }
            }
            KeyCode::Char('d') => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeadlineEdit {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                    current: task.deadline,
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .style(self.palette.base())
            .border_style(Style::default().fg(self.palette.accent));

        if self.tasks.is_empty() {
            let empty_list = List::new(vec![ListItem::new("No tasks yet. Press 'a' to add one.")])
                .block(block)
                .style(Style::default().fg(self.palette.muted));
            f.render_widget(empty_list, rect);
        } else {
            let items = self.create_task_list_items();
            let tasks_list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(self.palette.highlight)
                    .add_modifier(Modifier::BOLD),
            );

            f.render_stateful_widget(tasks_list, rect, &mut self.list_state);
        }
    }
}
