//! Counter response mapping

use super::model::CounterRow;
use crate::shared::{Counter, MessageResponse};

impl From<CounterRow> for Counter {
    fn from(row: CounterRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            value: row.value,
        }
    }
}

/// Confirmation body for `DELETE /api/counters/{name}`
pub fn deleted(name: &str) -> MessageResponse {
    MessageResponse::new(format!("Counter '{}' deleted successfully", name))
}
