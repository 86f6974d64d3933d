//! Counter wire types
//!
//! Request and response bodies for the `/api/counters` resource family.
//! Counters are addressed by their unique `name`.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Step used by increment/decrement when the caller gives none
pub const DEFAULT_AMOUNT: i64 = 1;

/// A named counter as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: i64,
    pub name: String,
    pub value: i64,
}

/// Body of `POST /api/counters`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCounterRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<i64>,
}

impl CreateCounterRequest {
    pub fn new(name: impl Into<String>, initial_value: Option<i64>) -> Self {
        Self {
            name: name.into(),
            initial_value,
        }
    }

    pub fn initial_value(&self) -> i64 {
        self.initial_value.unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        crate::shared::error::require_non_empty("name", &self.name)
    }
}

/// Body of `PUT /api/counters/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCounterRequest {
    pub value: i64,
}

/// Body of the increment and decrement routes. May be omitted entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

impl AmountRequest {
    pub fn amount(&self) -> i64 {
        self.amount.unwrap_or(DEFAULT_AMOUNT)
    }
}
