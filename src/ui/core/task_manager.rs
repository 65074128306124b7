use super::actions::Action;
use crate::state::Update;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs network operations off the event loop.
///
/// Each operation resolves to an optional [`Update`]; when there is one it is
/// sent back as [`Action::Apply`]. Operations are never cancelled individually,
/// only all at once when the manager is dropped.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn an operation whose result is reduced into the app state
    pub fn spawn_operation<Fut>(&mut self, description: String, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Option<Update>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            if let Some(update) = operation.await {
                // The receiver is gone only while the app shuts down
                let _ = action_sender.send(Action::Apply(update));
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Forget finished tasks, returning their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id).map(|task| (id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tasks not yet cleaned up
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether any spawned task is still running
    pub fn is_busy(&self) -> bool {
        self.tasks.values().any(|task| !task.handle.is_finished())
    }

    /// Description and age of the longest running task
    pub fn oldest_running(&self) -> Option<(&str, std::time::Duration)> {
        self.tasks
            .values()
            .filter(|task| !task.handle.is_finished())
            .min_by_key(|task| task.started_at)
            .map(|task| (task.description.as_str(), task.started_at.elapsed()))
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
