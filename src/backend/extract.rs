//! Request body extractors
//!
//! axum's `Json` and `Path` reject with plain-text bodies (422 for a missing
//! field). These extractors reject with `BackendError` instead, so a malformed
//! body or path parameter answers 400 with the same JSON error shape as every
//! other failure and names the offending field when it is known.

use axum::body::Bytes;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, MatchedPath, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON body that must be present and well-formed
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

/// JSON body that may be omitted; an empty body yields `T::default()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrDefault<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(BackendError::validation("body", "request body is required"));
        }
        parse(&bytes).map(ValidJson)
    }
}

impl<S, T> FromRequest<S> for JsonOrDefault<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonOrDefault(T::default()));
        }
        parse(&bytes).map(JsonOrDefault)
    }
}

/// Path parameters; a value that does not parse is a validation error on that parameter
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ValidPath(value)),
            Err(rejection) if rejection.status().is_client_error() => {
                let field = path_field(parts, &rejection);
                Err(BackendError::validation(field, rejection.body_text()))
            }
            Err(rejection) => Err(BackendError::handler(rejection.status(), rejection.body_text())),
        }
    }
}

/// Parameter a path rejection is about: the key axum reports, else the
/// route's only parameter
fn path_field(parts: &Parts, rejection: &PathRejection) -> String {
    if let PathRejection::FailedToDeserializePathParams(err) = rejection {
        if let ErrorKind::ParseErrorAtKey { key, .. } | ErrorKind::InvalidUtf8InPathParam { key } =
            err.kind()
        {
            return key.clone();
        }
    }
    parts
        .extensions
        .get::<MatchedPath>()
        .and_then(|matched| single_param(matched.as_str()))
        .unwrap_or("path")
        .to_string()
}

/// Name of the one `{param}` in a route, if it has exactly one
fn single_param(route: &str) -> Option<&str> {
    let mut params = route
        .split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'));
    let first = params.next()?;
    params.next().is_none().then_some(first)
}

async fn read_body<S: Send + Sync>(req: Request, state: &S) -> Result<Bytes, BackendError> {
    Bytes::from_request(req, state)
        .await
        .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(bytes).map_err(|err| {
        let message = err.to_string();
        let field = field_name(&message).unwrap_or("body").to_string();
        BackendError::validation(field, message)
    })
}

/// Field named by serde's "missing field `x`" / "unknown field `x`" messages
fn field_name(message: &str) -> Option<&str> {
    if !(message.starts_with("missing field") || message.starts_with("unknown field")) {
        return None;
    }
    message.split('`').nth(1)
}
