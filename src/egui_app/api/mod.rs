//! Client API Gateway
//!
//! `ApiClient` wraps one `reqwest::Client` and a base URL and does every
//! round trip through a single `request` function. The resource gateways
//! (`TodoApi`, `CounterApi`) are thin structs over it.
//!
//! Any non-2xx response becomes `ApiError::Server` carrying the message the
//! backend put in the body. There are no retries and no timeouts.

pub mod todos;
pub mod counters;

pub use counters::CounterApi;
pub use todos::TodoApi;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::ConfigError;

/// Failure of one gateway call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never got a response
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// HTTP client bound to one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ConfigError::InvalidUrl(base_url.to_string()))?;
        Ok(Self {
            base_url,
            http: Client::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.server_url())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &[&str], body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, body).await
    }

    pub async fn put<B, T>(&self, path: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// One round trip: send, check the status, decode the body
    async fn request<B, T>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "API request");

        let mut builder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            let message = error_message(&bytes)
                .unwrap_or_else(|| format!("{} {} failed", method, url.path()));
            tracing::warn!(status = status.as_u16(), %url, "{}", message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    /// Base URL with `segments` appended, each percent-encoded
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Path segments a resource family is mounted under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(Vec<String>);

impl BasePath {
    /// Split `/api/todos` style paths; empty segments are dropped
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// The base segments followed by `rest`
    pub fn join<'a>(&'a self, rest: &[&'a str]) -> Vec<&'a str> {
        self.0.iter().map(String::as_str).chain(rest.iter().copied()).collect()
    }
}

/// Message the server put in an error body: `detail`, else `error`
fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["detail", "error"]
        .iter()
        .find_map(|key| value.get(key)?.as_str().map(str::to_string))
}
