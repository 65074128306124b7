use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::constants::ERROR_INVALID_DATE_INPUT;
use taskdeck::tasks::Rejection;
use taskdeck::ui::components::dialogs::TaskField;
use taskdeck::ui::components::DialogComponent;
use taskdeck::ui::core::{Action, Component, DialogType};

use crate::common::date;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn open(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(dialog_type));
    dialog
}

#[test]
fn test_task_creation_submits_title_and_date() {
    let mut dialog = open(DialogType::TaskCreation);

    type_text(&mut dialog, "Write report");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "2099-01-01");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    assert_eq!(
        action,
        Action::AddTask {
            title: "Write report".to_string(),
            deadline: Some(date(2099, 1, 1)),
        }
    );
    assert!(!dialog.is_visible());
}

#[test]
fn test_task_creation_with_blank_date_defers_to_store() {
    let mut dialog = open(DialogType::TaskCreation);

    type_text(&mut dialog, "Undated");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    assert_eq!(
        action,
        Action::AddTask {
            title: "Undated".to_string(),
            deadline: None,
        }
    );
}

#[test]
fn test_invalid_date_keeps_dialog_open() {
    let mut dialog = open(DialogType::TaskCreation);

    type_text(&mut dialog, "Write report");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "2099-13-01");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    assert_eq!(action, Action::None);
    assert!(dialog.is_visible());
    assert_eq!(dialog.validation_error.as_deref(), Some(ERROR_INVALID_DATE_INPUT));
    assert_eq!(dialog.primary_input.text, "Write report");

    // Editing clears the message
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert!(dialog.validation_error.is_none());
}

#[test]
fn test_deadline_edit_is_prefilled_and_submits_new_date() {
    let mut dialog = open(DialogType::DeadlineEdit {
        task_id: "t1".to_string(),
        title: "Write report".to_string(),
        current: date(2099, 1, 1),
    });
    assert_eq!(dialog.primary_input.text, "2099-01-01");

    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Backspace));
    type_text(&mut dialog, "15");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    assert_eq!(
        action,
        Action::UpdateDeadline {
            task_id: "t1".to_string(),
            deadline: date(2099, 1, 15),
        }
    );
}

#[test]
fn test_delete_confirmation_keys() {
    let target = DialogType::DeleteConfirmation {
        task_id: "t1".to_string(),
        title: "Write report".to_string(),
    };

    let mut dialog = open(target.clone());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::DeleteTask("t1".to_string()));

    let mut dialog = open(target);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::HideDialog);
}

#[test]
fn test_login_accepts_pasted_credential() {
    let mut dialog = open(DialogType::Login);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);

    dialog.handle_paste("header.payload.signature\n");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    assert_eq!(action, Action::Login("header.payload.signature".to_string()));
}

#[test]
fn test_escape_hides_dialog() {
    let mut dialog = open(DialogType::Help);

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    dialog.update(action);

    assert!(!dialog.is_visible());
}

#[test]
fn test_restored_draft_focuses_the_rejected_field() {
    let mut dialog = DialogComponent::new();

    dialog.restore_task_draft("", Some(date(2099, 1, 1)), &Rejection::EmptyTitle);
    assert_eq!(dialog.dialog_type, Some(DialogType::TaskCreation));
    assert_eq!(dialog.deadline_input.text, "2099-01-01");
    assert_eq!(dialog.focus, TaskField::Title);

    dialog.restore_task_draft("Undated", None, &Rejection::MissingDeadline);
    assert_eq!(dialog.primary_input.text, "Undated");
    assert!(dialog.deadline_input.text.is_empty());
    assert_eq!(dialog.focus, TaskField::Deadline);
}
