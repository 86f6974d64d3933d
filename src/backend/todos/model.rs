//! Todo store row and its in-place mutations

use crate::shared::UpdateTodoRequest;

/// One row of the `todos` table
///
/// `description` is nullable in storage; the mapper turns `NULL` into `""`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoRow {
    /// Replace only the fields present in `update`
    pub fn apply_update(&mut self, update: &UpdateTodoRequest) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
