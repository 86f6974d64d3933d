//! Counter gateway

use super::{ApiClient, ApiError, BasePath};
use crate::shared::{
    AmountRequest, Counter, CreateCounterRequest, MessageResponse, UpdateCounterRequest,
};

/// Calls for the `/api/counters` resource family
#[derive(Debug, Clone)]
pub struct CounterApi {
    client: ApiClient,
    base: BasePath,
}

impl CounterApi {
    pub fn new(client: ApiClient) -> Self {
        Self::with_base(client, "/api/counters")
    }

    /// Gateway for a counter collection mounted at `base_path`
    pub fn with_base(client: ApiClient, base_path: &str) -> Self {
        Self {
            client,
            base: BasePath::parse(base_path),
        }
    }

    fn path<'a>(&'a self, rest: &[&'a str]) -> Vec<&'a str> {
        self.base.join(rest)
    }

    pub async fn list(&self) -> Result<Vec<Counter>, ApiError> {
        self.client.get(&self.path(&[])).await
    }

    pub async fn get(&self, name: &str) -> Result<Counter, ApiError> {
        self.client.get(&self.path(&[name])).await
    }

    pub async fn create(&self, request: &CreateCounterRequest) -> Result<Counter, ApiError> {
        self.client.post(&self.path(&[]), Some(request)).await
    }

    /// Set the value outright
    pub async fn update(&self, name: &str, value: i64) -> Result<Counter, ApiError> {
        self.client
            .put(&self.path(&[name]), &UpdateCounterRequest { value })
            .await
    }

    /// `amount: None` leaves the step to the server (1)
    pub async fn increment(&self, name: &str, amount: Option<i64>) -> Result<Counter, ApiError> {
        self.client
            .post(&self.path(&[name, "increment"]), Some(&AmountRequest { amount }))
            .await
    }

    pub async fn decrement(&self, name: &str, amount: Option<i64>) -> Result<Counter, ApiError> {
        self.client
            .post(&self.path(&[name, "decrement"]), Some(&AmountRequest { amount }))
            .await
    }

    pub async fn reset(&self, name: &str) -> Result<Counter, ApiError> {
        self.client.post(&self.path(&[name, "reset"]), None::<&()>).await
    }

    pub async fn delete(&self, name: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete(&self.path(&[name])).await
    }
}
