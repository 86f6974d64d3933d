//! Todo wire types
//!
//! Request and response bodies for the `/api/todos` resource family. The
//! backend maps its store rows into [`Todo`] and the client caches the same
//! type, so both sides agree on field names and defaults.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A todo item as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    /// Empty string when none was given at creation
    pub description: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Reject a blank title before it reaches the service
    pub fn validate(&self) -> Result<(), SharedError> {
        crate::shared::error::require_non_empty("title", &self.title)
    }
}

/// Body of `PUT /api/todos/{id}`
///
/// Every field is optional; omitted fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        match &self.title {
            Some(title) => crate::shared::error::require_non_empty("title", title),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_without_description() {
        let request: CreateTodoRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(request, CreateTodoRequest::new("Buy milk", None));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_missing_title_fails_to_parse() {
        let result: Result<CreateTodoRequest, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let request = CreateTodoRequest::new("   ", None);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_serializes_only_provided_fields() {
        let update = UpdateTodoRequest {
            description: Some("new".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "description": "new" }));
    }
}
