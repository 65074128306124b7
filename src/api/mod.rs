//! Remote task service interface.
//!
//! This module defines the interface to the task service along with the wire
//! types and error handling. The service owns every task: the client only reads
//! the two collections and sends directives.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::datetime;

pub mod http;

pub use http::HttpTaskApi;

/// Common error types for task service calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// A task as the service reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: NaiveDate,
    #[serde(rename = "userEmail", default)]
    pub owner_email: String,
}

/// Response of the list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLists {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(rename = "completedTasks", default)]
    pub completed_tasks: Vec<Task>,
}

/// Direction of a reorder request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTaskArgs {
    #[serde(rename = "userEmail")]
    pub owner_email: String,
    pub title: String,
    pub deadline: NaiveDate,
}

/// Body of a deadline change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineUpdate {
    pub task_id: String,
    pub deadline: NaiveDate,
}

/// Body of a reorder request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    #[serde(rename = "userEmail")]
    pub owner_email: String,
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub direction: Direction,
}

/// Body of a completion request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub task_id: String,
}

/// Task service interface.
///
/// Every mutation is a directive: it returns nothing about the resulting state,
/// callers refetch with [`TaskApi::fetch_tasks`].
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn fetch_tasks(&self, owner_email: &str) -> Result<TaskLists, ApiError>;

    async fn create_task(&self, args: &CreateTaskArgs) -> Result<(), ApiError>;
    async fn update_deadline(&self, update: &DeadlineUpdate) -> Result<(), ApiError>;
    async fn move_task(&self, request: &MoveRequest) -> Result<(), ApiError>;
    async fn complete_task(&self, request: &CompletionRequest) -> Result<(), ApiError>;
    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError>;
}

fn deserialize_deadline<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    datetime::parse_deadline(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid deadline '{}'", raw)))
}
