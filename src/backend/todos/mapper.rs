//! Todo response mapping

use super::model::TodoRow;
use crate::shared::{MessageResponse, Todo};

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            completed: row.completed,
        }
    }
}

/// Confirmation body for `DELETE /api/todos/{id}`
pub fn deleted(id: i64) -> MessageResponse {
    MessageResponse::new(format!("Todo {} deleted successfully", id))
}
