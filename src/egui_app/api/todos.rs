//! Todo gateway

use super::{ApiClient, ApiError, BasePath};
use crate::shared::{CreateTodoRequest, MessageResponse, Todo, UpdateTodoRequest};

/// Calls for the `/api/todos` resource family
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: ApiClient,
    base: BasePath,
}

impl TodoApi {
    pub fn new(client: ApiClient) -> Self {
        Self::with_base(client, "/api/todos")
    }

    /// Gateway for a todo collection mounted at `base_path`
    pub fn with_base(client: ApiClient, base_path: &str) -> Self {
        Self {
            client,
            base: BasePath::parse(base_path),
        }
    }

    fn path<'a>(&'a self, rest: &[&'a str]) -> Vec<&'a str> {
        self.base.join(rest)
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        self.client.get(&self.path(&[])).await
    }

    pub async fn get(&self, id: i64) -> Result<Todo, ApiError> {
        let id = id.to_string();
        self.client.get(&self.path(&[&id])).await
    }

    pub async fn create(&self, request: &CreateTodoRequest) -> Result<Todo, ApiError> {
        self.client.post(&self.path(&[]), Some(request)).await
    }

    pub async fn update(&self, id: i64, request: &UpdateTodoRequest) -> Result<Todo, ApiError> {
        let id = id.to_string();
        self.client.put(&self.path(&[&id]), request).await
    }

    pub async fn toggle(&self, id: i64) -> Result<Todo, ApiError> {
        let id = id.to_string();
        self.client.post(&self.path(&[&id, "toggle"]), None::<&()>).await
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let id = id.to_string();
        self.client.delete(&self.path(&[&id])).await
    }
}
