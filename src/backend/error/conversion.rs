/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for backend errors,
 * so handlers can return `Result<_, BackendError>` and let axum build the
 * HTTP response.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "detail": "Counter 'hits' not found",
 *   "status": 404
 * }
 * ```
 *
 * Store errors also convert into `BackendError` here.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;
use crate::shared::ErrorBody;

/// Key-less translation, for store calls that do not address one record
///
/// The services map keyed calls themselves so the message names the key.
impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => BackendError::not_found("Record not found"),
            StoreError::AlreadyExists => BackendError::already_exists("Record already exists"),
            StoreError::Database(err) => BackendError::Database(err),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), "{}", message);
        }

        let body = ErrorBody {
            detail: message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
