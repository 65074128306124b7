//! HTTP implementation of the task service interface.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use std::time::Duration;

use super::{ApiError, CompletionRequest, CreateTaskArgs, DeadlineUpdate, MoveRequest, TaskApi, TaskLists};

/// Task service reached over HTTP/JSON.
///
/// All calls target one base endpoint: GET lists, POST creates, PUT carries the
/// three update shapes, DELETE appends the task id as a path segment.
#[derive(Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: Url,
}

impl HttpTaskApi {
    /// Create a client for `base_url`. Without `timeout` the transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidData(format!("invalid base URL '{}': {}", base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// The endpoint this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn task_url(&self, task_id: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidData(format!("cannot append a path to '{}'", self.base_url)))?
            .pop_if_empty()
            .push(task_id);
        Ok(url)
    }

    async fn put<B: Serialize + ?Sized>(&self, body: &B) -> Result<(), ApiError> {
        self.send(self.client.put(self.base_url.clone()).json(body)).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn fetch_tasks(&self, owner_email: &str) -> Result<TaskLists, ApiError> {
        let request = self
            .client
            .get(self.base_url.clone())
            .query(&[("userEmail", owner_email)]);
        let response = self.send(request).await?;

        response
            .json::<TaskLists>()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))
    }

    async fn create_task(&self, args: &CreateTaskArgs) -> Result<(), ApiError> {
        self.send(self.client.post(self.base_url.clone()).json(args)).await?;
        Ok(())
    }

    async fn update_deadline(&self, update: &DeadlineUpdate) -> Result<(), ApiError> {
        self.put(update).await
    }

    async fn move_task(&self, request: &MoveRequest) -> Result<(), ApiError> {
        self.put(request).await
    }

    async fn complete_task(&self, request: &CompletionRequest) -> Result<(), ApiError> {
        self.put(request).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let url = self.task_url(task_id)?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
