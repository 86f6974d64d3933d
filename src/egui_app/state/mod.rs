use std::collections::HashMap;
use thiserror::Error;
use tokio::runtime::Handle;

use crate::egui_app::api::{ApiClient, CounterApi, TodoApi};
use crate::egui_app::sync::{CounterSync, TodoSync};
use crate::egui_app::Config;
use crate::shared::{ConfigError, UpdateTodoRequest};

/// Which app the main panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Todos,
    Counters,
}

/// Text inputs of the todo creation form
#[derive(Debug, Clone, Default)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
}

/// Text inputs of the counter creation form
#[derive(Debug, Clone, Default)]
pub struct CounterForm {
    pub name: String,
    pub initial_value: String,
}

/// A todo being edited in place
#[derive(Debug, Clone)]
pub struct TodoEdit {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// A numeric input that does not hold a whole number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a whole number")]
pub struct InvalidNumber(pub String);

/// Parse a typed number; blank input is `None`
pub fn parse_optional_number(text: &str) -> Result<Option<i64>, InvalidNumber> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|_| InvalidNumber(text.to_string()))
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub current_tab: Tab,
    pub todos: TodoSync,
    pub counters: CounterSync,
    pub todo_form: TodoForm,
    pub todo_edit: Option<TodoEdit>,
    pub counter_form: CounterForm,
    /// Step used by the +/- buttons, as typed
    pub counter_step: String,
    /// Per-counter "set value" inputs, as typed
    pub counter_values: HashMap<String, String>,
}

impl AppState {
    /// Build the state and start loading both collections
    pub fn new(config: Config, runtime: Handle) -> Result<Self, ConfigError> {
        let client = ApiClient::from_config(&config)?;
        let mut todos = TodoSync::new(TodoApi::new(client.clone()), runtime.clone());
        let mut counters = CounterSync::new(CounterApi::new(client), runtime);
        todos.refetch();
        counters.refetch();

        tracing::info!(server = config.server_url(), "Client state initialized");

        Ok(Self {
            config,
            current_tab: Tab::default(),
            todos,
            counters,
            todo_form: TodoForm::default(),
            todo_edit: None,
            counter_form: CounterForm::default(),
            counter_step: "1".to_string(),
            counter_values: HashMap::new(),
        })
    }

    /// Drain finished requests of both collections
    pub fn poll(&mut self) {
        self.todos.poll();
        if self.counters.poll() {
            self.prune_counter_values();
        }
    }

    /// Drop "set value" inputs of counters no longer in the collection
    fn prune_counter_values(&mut self) {
        let counters = self.counters.items();
        self.counter_values
            .retain(|name, _| counters.iter().any(|counter| &counter.name == name));
    }

    pub fn is_busy(&self) -> bool {
        self.todos.is_busy() || self.counters.is_busy()
    }

    pub fn has_notices(&self) -> bool {
        !self.todos.notices().is_empty() || !self.counters.notices().is_empty()
    }

    pub fn handle_create_todo(&mut self) {
        let description = self.todo_form.description.clone();
        if self.todos.create(&self.todo_form.title, Some(&description)) {
            self.todo_form = TodoForm::default();
        }
    }

    pub fn start_edit(&mut self, id: i64) {
        if let Some(todo) = self.todos.items().iter().find(|todo| todo.id == id) {
            self.todo_edit = Some(TodoEdit {
                id,
                title: todo.title.clone(),
                description: todo.description.clone(),
            });
        }
    }

    pub fn handle_save_edit(&mut self) {
        let Some(edit) = self.todo_edit.take() else {
            return;
        };
        let request = UpdateTodoRequest {
            title: Some(edit.title.trim().to_string()),
            description: Some(edit.description.clone()),
            completed: None,
        };
        if !self.todos.update(edit.id, request) {
            self.todo_edit = Some(edit);
        }
    }

    pub fn handle_create_counter(&mut self) {
        let initial_value = match parse_optional_number(&self.counter_form.initial_value) {
            Ok(value) => value,
            Err(e) => {
                self.counters.notify(e.to_string());
                return;
            }
        };

        if self.counters.create(&self.counter_form.name, initial_value) {
            self.counter_form = CounterForm::default();
        }
    }

    /// Add the typed step; a blank step leaves it to the server
    pub fn handle_increment(&mut self, name: &str) {
        match parse_optional_number(&self.counter_step) {
            Ok(step) => self.counters.increment(name, step),
            Err(e) => self.counters.notify(e.to_string()),
        }
    }

    pub fn handle_decrement(&mut self, name: &str) {
        match parse_optional_number(&self.counter_step) {
            Ok(step) => self.counters.decrement(name, step),
            Err(e) => self.counters.notify(e.to_string()),
        }
    }

    pub fn handle_set_counter(&mut self, name: &str) {
        let typed = self.counter_values.get(name).map(String::as_str).unwrap_or_default();
        match parse_optional_number(typed) {
            Ok(Some(value)) => {
                self.counters.update(name, value);
                self.counter_values.remove(name);
            }
            Ok(None) => self.counters.notify(format!("Enter a value for counter '{}'", name)),
            Err(e) => self.counters.notify(e.to_string()),
        }
    }
}
