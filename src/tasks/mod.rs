//! Task store client.
//!
//! Sends directives to the task service and re-reads both collections after
//! every successful one. Nothing is patched locally: the only way the client's
//! view of tasks changes is a fresh [`Snapshot`].
//!
//! Failures never propagate. They are logged and reported as
//! [`Outcome::Unchanged`], leaving the caller's current snapshot in place.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

use crate::api::{
    ApiError, CompletionRequest, CreateTaskArgs, DeadlineUpdate, Direction, MoveRequest, Task, TaskApi, TaskLists,
};
use crate::constants::{
    LOG_ERROR_ADD_TASK, LOG_ERROR_COMPLETE_TASK, LOG_ERROR_DELETE_TASK, LOG_ERROR_FETCH_TASKS, LOG_ERROR_MOVE_TASK,
    LOG_ERROR_UPDATE_DEADLINE, REJECT_DEADLINE_IN_PAST, REJECT_EMPTY_TITLE, REJECT_MISSING_DEADLINE,
};
use crate::logger::Logger;
use crate::utils::datetime;

/// The client's copy of both collections as of the last successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Snapshot {
    /// Build a snapshot from a list response, keeping server order.
    ///
    /// An id listed in both collections stays only in `completed`.
    pub fn from_lists(lists: TaskLists) -> Self {
        let completed_ids: HashSet<&str> = lists.completed_tasks.iter().map(|t| t.id.as_str()).collect();
        let active = lists
            .tasks
            .iter()
            .filter(|task| !completed_ids.contains(task.id.as_str()))
            .cloned()
            .collect();

        Self {
            active,
            completed: lists.completed_tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }
}

/// Why a new task was refused before any request went out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{}", REJECT_EMPTY_TITLE)]
    EmptyTitle,

    #[error("{}", REJECT_MISSING_DEADLINE)]
    MissingDeadline,

    #[error("{}", REJECT_DEADLINE_IN_PAST)]
    DeadlineInPast { deadline: NaiveDate, today: NaiveDate },
}

/// Result of a task store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The directive (if any) succeeded and this is the refetched state.
    Refreshed(Snapshot),
    /// Local validation refused the input; nothing was sent.
    Rejected(Rejection),
    /// A request failed; keep showing the current snapshot.
    Unchanged,
}

/// Check a new task's title and deadline against `today`.
///
/// Returns the trimmed title and the deadline to send.
pub fn validate_new_task(
    title: &str,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(String, NaiveDate), Rejection> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Rejection::EmptyTitle);
    }
    let deadline = deadline.ok_or(Rejection::MissingDeadline)?;
    if datetime::is_before(deadline, today) {
        return Err(Rejection::DeadlineInPast { deadline, today });
    }
    Ok((title.to_string(), deadline))
}

/// Issues directives against the task service and refetches after each.
#[derive(Clone)]
pub struct TaskStoreClient {
    api: Arc<dyn TaskApi>,
    logger: Logger,
}

impl TaskStoreClient {
    pub fn new(api: Arc<dyn TaskApi>, logger: Logger) -> Self {
        Self { api, logger }
    }

    /// Fetch both collections for `owner_email`.
    ///
    /// `None` means the fetch failed and was logged.
    pub async fn fetch_tasks(&self, owner_email: &str) -> Option<Snapshot> {
        match self.api.fetch_tasks(owner_email).await {
            Ok(lists) => {
                let listed = lists.tasks.len();
                let snapshot = Snapshot::from_lists(lists);
                if snapshot.active.len() != listed {
                    self.logger.error(format!(
                        "Tasks: Server listed {} task(s) as both active and completed",
                        listed - snapshot.active.len()
                    ));
                }
                self.logger.log(format!(
                    "Tasks: Fetched {} active and {} completed task(s) for {}",
                    snapshot.active.len(),
                    snapshot.completed.len(),
                    owner_email
                ));
                Some(snapshot)
            }
            Err(e) => {
                self.logger.error(format!("{}: {}", LOG_ERROR_FETCH_TASKS, e));
                None
            }
        }
    }

    /// Validate against today's local date, then create and refetch.
    pub async fn add_task(&self, owner_email: &str, title: &str, deadline: Option<NaiveDate>) -> Outcome {
        self.add_task_as_of(owner_email, title, deadline, datetime::today()).await
    }

    /// [`TaskStoreClient::add_task`] with an explicit "today".
    pub async fn add_task_as_of(
        &self,
        owner_email: &str,
        title: &str,
        deadline: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Outcome {
        let (title, deadline) = match validate_new_task(title, deadline, today) {
            Ok(valid) => valid,
            Err(rejection) => {
                self.logger.log(format!("Tasks: Rejected new task: {}", rejection));
                return Outcome::Rejected(rejection);
            }
        };

        let args = CreateTaskArgs {
            owner_email: owner_email.to_string(),
            title,
            deadline,
        };
        self.logger.log(format!(
            "Tasks: Creating '{}' due {}",
            args.title,
            datetime::format_ymd(args.deadline)
        ));
        let result = self.api.create_task(&args).await;
        self.refetch_after(owner_email, result, LOG_ERROR_ADD_TASK).await
    }

    /// Change a task's deadline. Past dates are accepted here.
    pub async fn update_deadline(&self, owner_email: &str, task_id: &str, deadline: NaiveDate) -> Outcome {
        let update = DeadlineUpdate {
            task_id: task_id.to_string(),
            deadline,
        };
        self.logger.log(format!(
            "Tasks: Setting deadline of {} to {}",
            task_id,
            datetime::format_ymd(deadline)
        ));
        let result = self.api.update_deadline(&update).await;
        self.refetch_after(owner_email, result, LOG_ERROR_UPDATE_DEADLINE).await
    }

    pub async fn delete_task(&self, owner_email: &str, task_id: &str) -> Outcome {
        self.logger.log(format!("Tasks: Deleting {}", task_id));
        let result = self.api.delete_task(task_id).await;
        self.refetch_after(owner_email, result, LOG_ERROR_DELETE_TASK).await
    }

    /// Ask the server to swap a task with its neighbor.
    ///
    /// No bounds check: the server decides whether the move is legal.
    pub async fn move_task(&self, owner_email: &str, task_id: &str, direction: Direction) -> Outcome {
        let request = MoveRequest {
            owner_email: owner_email.to_string(),
            task_id: task_id.to_string(),
            direction,
        };
        self.logger
            .log(format!("Tasks: Moving {} {:?}", task_id, direction));
        let result = self.api.move_task(&request).await;
        self.refetch_after(owner_email, result, LOG_ERROR_MOVE_TASK).await
    }

    pub async fn complete_task(&self, owner_email: &str, task_id: &str) -> Outcome {
        let request = CompletionRequest {
            task_id: task_id.to_string(),
        };
        self.logger.log(format!("Tasks: Completing {}", task_id));
        let result = self.api.complete_task(&request).await;
        self.refetch_after(owner_email, result, LOG_ERROR_COMPLETE_TASK).await
    }

    async fn refetch_after(&self, owner_email: &str, result: Result<(), ApiError>, context: &str) -> Outcome {
        if let Err(e) = result {
            self.logger.error(format!("{}: {}", context, e));
            return Outcome::Unchanged;
        }

        match self.fetch_tasks(owner_email).await {
            Some(snapshot) => Outcome::Refreshed(snapshot),
            None => Outcome::Unchanged,
        }
    }
}
