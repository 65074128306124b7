use crate::api::Task;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Palette;
use crate::utils::datetime;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Read-only list of completed tasks.
pub struct CompletedListComponent {
    pub tasks: Vec<Task>,
    pub icons: IconService,
    pub palette: Palette,
    pub date_format: String,
}

impl Default for CompletedListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletedListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            icons: IconService::default(),
            palette: Palette::default(),
            date_format: datetime::DEFAULT_DISPLAY_DATE_FORMAT.to_string(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

impl Component for CompletedListComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", self.icons.task_completed()),
                        Style::default().fg(self.palette.success),
                    ),
                    Span::styled(
                        task.title.clone(),
                        Style::default()
                            .fg(self.palette.muted)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                    Span::styled(
                        format!("  Due: {}", datetime::format_due(task.deadline, &self.date_format)),
                        Style::default().fg(self.palette.disabled),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(crate::constants::HEADER_COMPLETED)
                .style(self.palette.base())
                .border_style(Style::default().fg(self.palette.muted)),
        );

        f.render_widget(list, rect);
    }
}
