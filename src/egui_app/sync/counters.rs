//! Counter collection synchronizer

use futures_util::FutureExt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::runtime::Handle;

use super::{CollectionSync, Fetcher};
use crate::egui_app::api::CounterApi;
use crate::shared::{Counter, CreateCounterRequest};

/// Mutations a counter view can have in flight, keyed by counter name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CounterMutation {
    Create,
    Update(String),
    Increment(String),
    Decrement(String),
    Reset(String),
    Delete(String),
}

/// Cached counter list driven through `CounterApi`
pub struct CounterSync {
    api: CounterApi,
    sync: CollectionSync<Counter, CounterMutation>,
}

impl CounterSync {
    pub fn new(api: CounterApi, runtime: Handle) -> Self {
        let fetch_api = api.clone();
        let fetch: Fetcher<Counter> = Arc::new(move || {
            let api = fetch_api.clone();
            async move { api.list().await }.boxed()
        });
        Self {
            api,
            sync: CollectionSync::new(runtime, fetch),
        }
    }

    /// Create a counter; an empty name is refused before any request
    pub fn create(&mut self, name: &str, initial_value: Option<i64>) -> bool {
        let request = CreateCounterRequest::new(name.trim(), initial_value);
        if let Err(e) = request.validate() {
            self.sync.notify(e.to_string());
            return false;
        }

        let api = self.api.clone();
        self.sync
            .mutate(CounterMutation::Create, async move { api.create(&request).await });
        true
    }

    pub fn update(&mut self, name: &str, value: i64) {
        let api = self.api.clone();
        let key = name.to_string();
        self.sync.mutate(CounterMutation::Update(key.clone()), async move {
            api.update(&key, value).await
        });
    }

    pub fn increment(&mut self, name: &str, amount: Option<i64>) {
        let api = self.api.clone();
        let key = name.to_string();
        self.sync.mutate(CounterMutation::Increment(key.clone()), async move {
            api.increment(&key, amount).await
        });
    }

    pub fn decrement(&mut self, name: &str, amount: Option<i64>) {
        let api = self.api.clone();
        let key = name.to_string();
        self.sync.mutate(CounterMutation::Decrement(key.clone()), async move {
            api.decrement(&key, amount).await
        });
    }

    pub fn reset(&mut self, name: &str) {
        let api = self.api.clone();
        let key = name.to_string();
        self.sync
            .mutate(CounterMutation::Reset(key.clone()), async move { api.reset(&key).await });
    }

    pub fn delete(&mut self, name: &str) {
        let api = self.api.clone();
        let key = name.to_string();
        self.sync
            .mutate(CounterMutation::Delete(key.clone()), async move { api.delete(&key).await });
    }

    /// Whether any mutation addressing `name` is in flight
    pub fn is_busy_with(&self, name: &str) -> bool {
        [
            CounterMutation::Update(name.to_string()),
            CounterMutation::Increment(name.to_string()),
            CounterMutation::Decrement(name.to_string()),
            CounterMutation::Reset(name.to_string()),
            CounterMutation::Delete(name.to_string()),
        ]
        .iter()
        .any(|kind| self.sync.is_pending(kind))
    }
}

impl Deref for CounterSync {
    type Target = CollectionSync<Counter, CounterMutation>;

    fn deref(&self) -> &Self::Target {
        &self.sync
    }
}

impl DerefMut for CounterSync {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.sync
    }
}
