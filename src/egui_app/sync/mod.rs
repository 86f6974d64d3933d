//! # UI State Synchronizer
//!
//! Keeps a client-side copy of one collection in step with the server.
//!
//! ## Model
//!
//! - The whole collection is cached as one unit and reloaded whenever any
//!   mutation succeeds; the cache is never patched item by item.
//! - Network futures run on a tokio runtime owned by the app. Results come
//!   back over `std::sync::mpsc` channels and are drained by [`CollectionSync::poll`]
//!   once per frame, so the UI thread never blocks.
//! - Each mutation kind is `Idle` until started, `Pending` until every
//!   in-flight mutation of that kind has landed, then `Idle` again.
//! - A failed mutation leaves the cache alone and is reported once as a
//!   [`Notice`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todocount::egui_app::api::{ApiClient, TodoApi};
//! use todocount::egui_app::sync::TodoSync;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let api = TodoApi::new(ApiClient::new("http://127.0.0.1:8000").unwrap());
//! let mut todos = TodoSync::new(api, runtime.handle().clone());
//!
//! todos.refetch();
//! todos.create("Buy milk", None);
//! // each frame:
//! todos.poll();
//! ```

pub mod notice;
pub mod todos;
pub mod counters;

pub use counters::{CounterMutation, CounterSync};
pub use notice::Notice;
pub use todos::{TodoMutation, TodoSync};

use futures_util::future::BoxFuture;
use std::future::Future;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::egui_app::api::ApiError;

/// How long a notice stays visible unless dismissed
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(6);

/// Loads the whole collection
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<Vec<T>, ApiError>> + Send + Sync>;

/// Cached collection plus the state of its in-flight requests
///
/// `K` names a mutation kind; [`is_pending`](Self::is_pending) reports
/// whether any mutation of that kind is in flight.
pub struct CollectionSync<T, K> {
    runtime: Handle,
    fetch: Fetcher<T>,
    items: Vec<T>,
    loaded: bool,
    pending_load: Option<Receiver<Result<Vec<T>, ApiError>>>,
    stale: bool,
    pending_mutations: Vec<(K, Receiver<Result<(), ApiError>>)>,
    notices: Vec<Notice>,
    notice_ttl: Duration,
}

impl<T, K> CollectionSync<T, K>
where
    T: Send + 'static,
    K: PartialEq,
{
    pub fn new(runtime: Handle, fetch: Fetcher<T>) -> Self {
        Self {
            runtime,
            fetch,
            items: Vec::new(),
            loaded: false,
            pending_load: None,
            stale: false,
            pending_mutations: Vec::new(),
            notices: Vec::new(),
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// The last successfully loaded collection
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether at least one load has completed
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub fn is_pending(&self, kind: &K) -> bool {
        self.pending_mutations.iter().any(|(k, _)| k == kind)
    }

    /// Whether anything is in flight
    pub fn is_busy(&self) -> bool {
        self.is_loading() || !self.pending_mutations.is_empty()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    /// Show `message` as a notice without any request
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(Notice::new(message));
    }

    /// Start reloading the collection
    ///
    /// When a load is already in flight the cache is marked stale and one
    /// more load starts after it lands.
    pub fn refetch(&mut self) {
        if self.pending_load.is_some() {
            self.stale = true;
            return;
        }

        let (tx, rx) = channel();
        let load = (self.fetch)();
        self.runtime.spawn(async move {
            let _ = tx.send(load.await);
        });
        self.pending_load = Some(rx);
    }

    /// Run one mutation; on success the collection is reloaded
    pub fn mutate<F, R>(&mut self, kind: K, mutation: F)
    where
        F: Future<Output = Result<R, ApiError>> + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let _ = tx.send(mutation.await.map(|_| ()));
        });
        self.pending_mutations.push((kind, rx));
    }

    /// Drain finished requests; call once per frame
    ///
    /// Returns whether anything landed.
    pub fn poll(&mut self) -> bool {
        let mut changed = self.poll_mutations();
        changed |= self.poll_load();
        self.expire_notices();
        changed
    }

    fn poll_mutations(&mut self) -> bool {
        let mut landed = false;
        let mut invalidate = false;
        let mut failures = Vec::new();

        self.pending_mutations.retain(|(_, rx)| match rx.try_recv() {
            Ok(Ok(())) => {
                landed = true;
                invalidate = true;
                false
            }
            Ok(Err(e)) => {
                landed = true;
                failures.push(e.to_string());
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                landed = true;
                failures.push("Request was cancelled".to_string());
                false
            }
        });

        for message in failures {
            tracing::warn!("Mutation failed: {}", message);
            self.notify(message);
        }
        if invalidate {
            self.refetch();
        }
        landed
    }

    fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.pending_load else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                self.pending_load = None;
                self.notify("Loading was cancelled");
                return true;
            }
        };
        self.pending_load = None;

        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
            }
            Err(e) => {
                tracing::warn!("Failed to load collection: {}", e);
                self.notify(e.to_string());
            }
        }

        if std::mem::take(&mut self.stale) {
            self.refetch();
        }
        true
    }

    fn expire_notices(&mut self) {
        let ttl = self.notice_ttl;
        self.notices.retain(|notice| !notice.is_expired(ttl));
    }
}
