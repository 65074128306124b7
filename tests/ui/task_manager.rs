use std::time::Duration;

use taskdeck::state::{Notice, Update};
use taskdeck::ui::core::{Action, TaskManager};

#[tokio::test]
async fn test_operation_result_comes_back_as_apply() {
    let (mut manager, mut rx) = TaskManager::new();

    let first = manager.spawn_operation("Loading tasks".to_string(), async {
        Some(Update::Notify(Notice::Info("done".to_string())))
    });
    let second = manager.spawn_operation("Nothing to report".to_string(), async { None });
    assert_ne!(first, second);
    assert_eq!(manager.task_count(), 2);

    let action = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(action, Action::Apply(Update::Notify(Notice::Info("done".to_string()))));

    while manager.is_busy() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 2);
    assert_eq!(manager.task_count(), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_oldest_running_describes_pending_work() {
    let (mut manager, _rx) = TaskManager::new();

    manager.spawn_operation("Deleting task".to_string(), async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        None
    });

    assert_eq!(manager.oldest_running().map(|(d, _)| d), Some("Deleting task"));

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_busy());
}
