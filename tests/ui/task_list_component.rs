use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use taskdeck::api::Direction;
use taskdeck::ui::components::task_list_component::{move_controls, MoveControls};
use taskdeck::ui::components::TaskListComponent;
use taskdeck::ui::core::{Action, Component, DialogType};
use taskdeck::ui::Palette;

use crate::common::{date, task};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render(list: &mut TaskListComponent) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal.draw(|f| list.render(f, f.area())).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_single_task_row_shows_due_date_and_dimmed_arrows() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![task("t1", "Write report", date(2099, 1, 1))]);

    let buffer = render(&mut list);
    let text = buffer_text(&buffer);

    assert!(text.contains("Write report"));
    assert!(text.contains("Due: 1/1/2099"));

    let disabled = Palette::default().disabled;
    let up = buffer.content().iter().find(|cell| cell.symbol() == "↑").unwrap();
    let down = buffer.content().iter().find(|cell| cell.symbol() == "↓").unwrap();
    assert_eq!(up.fg, disabled);
    assert_eq!(down.fg, disabled);
}

#[test]
fn test_middle_row_arrows_are_enabled() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![
        task("t1", "First", date(2099, 1, 1)),
        task("t2", "Second", date(2099, 1, 2)),
        task("t3", "Third", date(2099, 1, 3)),
    ]);

    let buffer = render(&mut list);
    let ups: Vec<_> = buffer.content().iter().filter(|cell| cell.symbol() == "↑").collect();

    assert_eq!(ups.len(), 3);
    assert_eq!(ups[0].fg, Palette::default().disabled);
    assert_eq!(ups[1].fg, Palette::default().accent);
}

#[test]
fn test_empty_list_shows_hint() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![]);

    let text = buffer_text(&render(&mut list));

    assert!(text.contains("No tasks yet"));
}

#[test]
fn test_move_controls_at_bounds() {
    assert_eq!(move_controls(0, 1), MoveControls { up: false, down: false });
    assert_eq!(move_controls(0, 3), MoveControls { up: false, down: true });
    assert_eq!(move_controls(1, 3), MoveControls { up: true, down: true });
    assert_eq!(move_controls(2, 3), MoveControls { up: true, down: false });
}

#[test]
fn test_move_keys_respect_bounds() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![task("t1", "First", date(2099, 1, 1)), task("t2", "Second", date(2099, 1, 2))]);

    assert_eq!(list.handle_key_events(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)), Action::None);
    assert_eq!(
        list.handle_key_events(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)),
        Action::MoveTask {
            task_id: "t1".to_string(),
            direction: Direction::Down
        }
    );
}

#[test]
fn test_selection_wraps_and_follows_task_after_reorder() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![task("t1", "First", date(2099, 1, 1)), task("t2", "Second", date(2099, 1, 2))]);

    let action = list.handle_key_events(key(KeyCode::Char('k')));
    list.update(action);
    assert_eq!(list.selected_task().map(|t| t.id.as_str()), Some("t2"));

    list.update_data(vec![task("t2", "Second", date(2099, 1, 2)), task("t1", "First", date(2099, 1, 1))]);
    assert_eq!(list.selected_index, 0);
    assert_eq!(list.selected_task().map(|t| t.id.as_str()), Some("t2"));
}

#[test]
fn test_row_actions_target_selected_task() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![task("t1", "Write report", date(2099, 1, 1))]);

    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::CompleteTask("t1".to_string()));
    assert_eq!(
        list.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Action::None
    );
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::ShowDialog(DialogType::DeleteConfirmation {
            task_id: "t1".to_string(),
            title: "Write report".to_string()
        })
    );
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('e'))),
        Action::ShowDialog(DialogType::DeadlineEdit {
            task_id: "t1".to_string(),
            title: "Write report".to_string(),
            current: date(2099, 1, 1)
        })
    );
}
