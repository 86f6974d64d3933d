//! Todo collection synchronizer

use futures_util::FutureExt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::runtime::Handle;

use super::{CollectionSync, Fetcher};
use crate::egui_app::api::TodoApi;
use crate::shared::{CreateTodoRequest, Todo, UpdateTodoRequest};

/// Mutations a todo view can have in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoMutation {
    Create,
    Update(i64),
    Toggle(i64),
    Delete(i64),
}

/// Cached todo list driven through `TodoApi`
pub struct TodoSync {
    api: TodoApi,
    sync: CollectionSync<Todo, TodoMutation>,
}

impl TodoSync {
    pub fn new(api: TodoApi, runtime: Handle) -> Self {
        let fetch_api = api.clone();
        let fetch: Fetcher<Todo> = Arc::new(move || {
            let api = fetch_api.clone();
            async move { api.list().await }.boxed()
        });
        Self {
            api,
            sync: CollectionSync::new(runtime, fetch),
        }
    }

    /// Create a todo; an empty title is refused before any request
    pub fn create(&mut self, title: &str, description: Option<&str>) -> bool {
        let request = CreateTodoRequest::new(
            title.trim(),
            description.filter(|d| !d.trim().is_empty()).map(str::to_string),
        );
        if let Err(e) = request.validate() {
            self.sync.notify(e.to_string());
            return false;
        }

        let api = self.api.clone();
        self.sync
            .mutate(TodoMutation::Create, async move { api.create(&request).await });
        true
    }

    pub fn update(&mut self, id: i64, request: UpdateTodoRequest) -> bool {
        if let Err(e) = request.validate() {
            self.sync.notify(e.to_string());
            return false;
        }

        let api = self.api.clone();
        self.sync
            .mutate(TodoMutation::Update(id), async move { api.update(id, &request).await });
        true
    }

    pub fn toggle(&mut self, id: i64) {
        let api = self.api.clone();
        self.sync
            .mutate(TodoMutation::Toggle(id), async move { api.toggle(id).await });
    }

    pub fn delete(&mut self, id: i64) {
        let api = self.api.clone();
        self.sync
            .mutate(TodoMutation::Delete(id), async move { api.delete(id).await });
    }
}

impl Deref for TodoSync {
    type Target = CollectionSync<Todo, TodoMutation>;

    fn deref(&self) -> &Self::Target {
        &self.sync
    }
}

impl DerefMut for TodoSync {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.sync
    }
}
