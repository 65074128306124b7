use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use taskdeck::config::DisplayConfig;
use taskdeck::constants::STORAGE_KEY_DARK_MODE;
use taskdeck::logger::Logger;
use taskdeck::session::SessionHolder;
use taskdeck::state::Notice;
use taskdeck::tasks::TaskStoreClient;
use taskdeck::ui::components::dialogs::TaskField;
use taskdeck::ui::core::{Action, Component, DialogType, EventType};
use taskdeck::ui::AppComponent;

use crate::common::{date, id_token, Call, CountingStore, RecordingApi};

struct Harness {
    app: AppComponent,
    api: Arc<RecordingApi>,
    store: Arc<CountingStore>,
}

fn harness() -> Harness {
    let api = Arc::new(RecordingApi::new());
    let store = Arc::new(CountingStore::default());
    let logger = Logger::new();
    let app = AppComponent::new(
        SessionHolder::new(store.clone(), logger.clone()),
        TaskStoreClient::new(api.clone(), logger.clone()),
        logger,
        &DisplayConfig::default(),
    );
    Harness { app, api, store }
}

/// Wait for background work and apply what it reports
async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        let busy = app.is_busy();
        for action in app.process_background_actions() {
            let action = app.update(action);
            app.handle_app_action(action).await;
        }
        if !busy {
            return;
        }
    }
    panic!("background work did not finish");
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await
        .unwrap();
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_sign_in_then_add_task_shows_row() {
    let Harness { mut app, api, .. } = harness();

    app.handle_app_action(Action::Login(id_token("Ada", "a@x.com"))).await;
    settle(&mut app).await;
    assert!(app.state().is_signed_in());

    app.handle_app_action(Action::AddTask {
        title: "Write report".to_string(),
        deadline: Some(date(2099, 1, 1)),
    })
    .await;
    settle(&mut app).await;

    let calls = api.calls();
    assert_eq!(calls.iter().filter(|c| matches!(c, Call::Create(_))).count(), 1);
    assert!(matches!(calls.last(), Some(Call::Fetch(owner)) if owner == "a@x.com"));
    assert_eq!(app.state().snapshot.active.len(), 1);

    let text = screen(&mut app);
    assert!(text.contains("Welcome, Ada!"));
    assert!(text.contains("Write report"));
    assert!(text.contains("Due: 1/1/2099"));
}

#[tokio::test]
async fn test_past_deadline_shows_notice_and_sends_nothing() {
    let Harness { mut app, api, .. } = harness();
    app.handle_app_action(Action::Login(id_token("Ada", "a@x.com"))).await;
    settle(&mut app).await;

    app.handle_app_action(Action::AddTask {
        title: "Too late".to_string(),
        deadline: Some(date(2000, 1, 1)),
    })
    .await;
    settle(&mut app).await;

    assert!(!api.calls().iter().any(|c| matches!(c, Call::Create(_))));
    assert_eq!(
        app.state().notice,
        Some(Notice::Error("Due date cannot be in the past!".to_string()))
    );

    // Any key dismisses the notice
    press(&mut app, KeyCode::Char('x')).await;
    assert!(app.state().notice.is_none());
}

#[tokio::test]
async fn test_rejected_draft_reopens_for_correction() {
    let Harness { mut app, api, .. } = harness();
    app.handle_app_action(Action::Login(id_token("Ada", "a@x.com"))).await;
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('a')).await;
    for c in "Too late".chars() {
        press(&mut app, KeyCode::Char(c)).await;
    }
    press(&mut app, KeyCode::Tab).await;
    for c in "2000-01-01".chars() {
        press(&mut app, KeyCode::Char(c)).await;
    }
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert!(matches!(app.state().notice, Some(Notice::Error(_))));
    press(&mut app, KeyCode::Esc).await;

    assert_eq!(app.dialog_type(), Some(&DialogType::TaskCreation));
    assert_eq!(app.dialog().primary_input.text, "Too late");
    assert_eq!(app.dialog().deadline_input.text, "2000-01-01");
    assert_eq!(app.dialog().focus, TaskField::Deadline);

    // Fix the date and submit again
    for _ in 0..10 {
        press(&mut app, KeyCode::Backspace).await;
    }
    for c in "2099-01-01".chars() {
        press(&mut app, KeyCode::Char(c)).await;
    }
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert!(app.dialog_type().is_none());
    assert_eq!(api.calls().iter().filter(|c| matches!(c, Call::Create(_))).count(), 1);
    assert_eq!(app.state().snapshot.active[0].title, "Too late");
}

#[tokio::test]
async fn test_bad_credential_stays_signed_out() {
    let Harness { mut app, store, .. } = harness();

    app.handle_app_action(Action::Login("garbage".to_string())).await;

    assert!(!app.state().is_signed_in());
    assert!(matches!(app.state().notice, Some(Notice::Error(_))));
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_signed_out_keys_open_login_and_ignore_task_keys() {
    let Harness { mut app, api, .. } = harness();

    press(&mut app, KeyCode::Char('a')).await;
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('l')).await;
    assert_eq!(app.dialog_type(), Some(&DialogType::Login));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_logout_clears_tasks_and_keeps_theme() {
    let Harness { mut app, store, .. } = harness();
    app.handle_app_action(Action::Login(id_token("Ada", "a@x.com"))).await;
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('t')).await;
    assert!(app.state().dark_mode);
    assert_eq!(store.value(STORAGE_KEY_DARK_MODE).as_deref(), Some("true"));

    press(&mut app, KeyCode::Char('L')).await;

    assert!(!app.state().is_signed_in());
    assert!(app.state().snapshot.is_empty());
    assert!(app.state().dark_mode);
    assert!(screen(&mut app).contains("Welcome to Task Manager"));
}

#[tokio::test]
async fn test_quit_key() {
    let Harness { mut app, .. } = harness();

    press(&mut app, KeyCode::Char('q')).await;

    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_while_a_task_is_selected() {
    let Harness { mut app, api, .. } = harness();
    app.handle_app_action(Action::Login(id_token("Ada", "a@x.com"))).await;
    settle(&mut app).await;
    app.handle_app_action(Action::AddTask {
        title: "Write report".to_string(),
        deadline: Some(date(2099, 1, 1)),
    })
    .await;
    settle(&mut app).await;
    let calls_before = api.calls().len();

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .await
        .unwrap();
    settle(&mut app).await;

    assert!(app.should_quit());
    assert_eq!(api.calls().len(), calls_before);
    assert_eq!(app.state().snapshot.active.len(), 1);
    assert!(app.state().snapshot.completed.is_empty());
}

#[tokio::test]
async fn test_theme_caption_names_the_other_theme() {
    let Harness { mut app, .. } = harness();

    let light = screen(&mut app);
    assert!(light.contains("Dark Mode"));
    assert!(!light.contains("Light Mode"));

    press(&mut app, KeyCode::Char('t')).await;
    assert!(app.state().dark_mode);

    let dark = screen(&mut app);
    assert!(dark.contains("Light Mode"));
    assert!(!dark.contains("Dark Mode"));
}
