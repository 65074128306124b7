#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

use taskdeck::api::{
    ApiError, CompletionRequest, CreateTaskArgs, DeadlineUpdate, Direction, MoveRequest, Task, TaskApi, TaskLists,
};
use taskdeck::storage::KeyValueStore;

/// A request the fake service received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Create(CreateTaskArgs),
    UpdateDeadline(DeadlineUpdate),
    Move(MoveRequest),
    Complete(CompletionRequest),
    Delete(String),
}

/// In-memory task service that records every call.
///
/// Mutations change its lists the way the real service does, so a refetch
/// after a directive sees the result.
#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    lists: Mutex<TaskLists>,
    next_id: Mutex<u32>,
    fail_mutations: bool,
    fail_fetch: bool,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(active: Vec<Task>, completed: Vec<Task>) -> Self {
        let api = Self::default();
        *api.lists.lock().unwrap() = TaskLists {
            tasks: active,
            completed_tasks: completed,
        };
        api
    }

    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let is_fetch = matches!(call, Call::Fetch(_));
        self.calls.lock().unwrap().push(call);
        if (is_fetch && self.fail_fetch) || (!is_fetch && self.fail_mutations) {
            return Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskApi for RecordingApi {
    async fn fetch_tasks(&self, owner_email: &str) -> Result<TaskLists, ApiError> {
        self.record(Call::Fetch(owner_email.to_string()))?;
        Ok(self.lists.lock().unwrap().clone())
    }

    async fn create_task(&self, args: &CreateTaskArgs) -> Result<(), ApiError> {
        self.record(Call::Create(args.clone()))?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.lists.lock().unwrap().tasks.push(Task {
            id: format!("t{}", next_id),
            title: args.title.clone(),
            deadline: args.deadline,
            owner_email: args.owner_email.clone(),
        });
        Ok(())
    }

    async fn update_deadline(&self, update: &DeadlineUpdate) -> Result<(), ApiError> {
        self.record(Call::UpdateDeadline(update.clone()))?;
        let mut lists = self.lists.lock().unwrap();
        if let Some(task) = lists.tasks.iter_mut().find(|t| t.id == update.task_id) {
            task.deadline = update.deadline;
        }
        Ok(())
    }

    async fn move_task(&self, request: &MoveRequest) -> Result<(), ApiError> {
        self.record(Call::Move(request.clone()))?;
        let mut lists = self.lists.lock().unwrap();
        if let Some(index) = lists.tasks.iter().position(|t| t.id == request.task_id) {
            match request.direction {
                Direction::Up if index > 0 => lists.tasks.swap(index, index - 1),
                Direction::Down if index + 1 < lists.tasks.len() => lists.tasks.swap(index, index + 1),
                _ => {}
            }
        }
        Ok(())
    }

    async fn complete_task(&self, request: &CompletionRequest) -> Result<(), ApiError> {
        self.record(Call::Complete(request.clone()))?;
        let mut lists = self.lists.lock().unwrap();
        if let Some(index) = lists.tasks.iter().position(|t| t.id == request.task_id) {
            let task = lists.tasks.remove(index);
            lists.completed_tasks.push(task);
        }
        Ok(())
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(task_id.to_string()))?;
        let mut lists = self.lists.lock().unwrap();
        lists.tasks.retain(|t| t.id != task_id);
        lists.completed_tasks.retain(|t| t.id != task_id);
        Ok(())
    }
}

/// Key-value store that counts writes
#[derive(Default)]
pub struct CountingStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl CountingStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_string(), value.to_string());
        store
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn task(id: &str, title: &str, deadline: NaiveDate) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        deadline,
        owner_email: "a@x.com".to_string(),
    }
}

/// An unsigned ID token carrying the given claims
pub fn id_token(name: &str, email: &str) -> String {
    let claims = serde_json::json!({ "name": name, "email": email, "iss": "accounts.google.com" });
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2lnbmF0dXJl", payload)
}
