//! Store test fixtures
//!
//! Every fixture owns a fresh temp directory holding both SQLite files, so
//! tests never share state and leave nothing behind.

use axum_test::TestServer;
use std::time::Duration;
use tempfile::TempDir;
use todocount::backend::server::config::{AppKind, ServerConfig};
use todocount::backend::server::create_app;

/// Temp directory plus the test configuration pointing into it
pub struct TestStores {
    pub dir: TempDir,
    pub config: ServerConfig,
}

impl TestStores {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = ServerConfig::for_test(dir.path());
        Self { dir, config }
    }

    /// Only `apps` get a store; the others answer 503
    pub fn with_apps(apps: &[AppKind]) -> Self {
        let mut stores = Self::new();
        stores.config.apps = apps.to_vec();
        stores
    }

    /// In-process server over the app router
    pub async fn server(&self) -> TestServer {
        let app = create_app(self.config.clone()).await;
        TestServer::new(app).expect("Failed to create test server")
    }

    /// Real server on 127.0.0.1 with an ephemeral port; returns its base URL
    pub async fn spawn(&self) -> String {
        let app = create_app(self.config.clone()).await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });
        format!("http://{}", addr)
    }
}

/// Poll `done` every few milliseconds until it holds, failing after five seconds
pub async fn eventually<F: FnMut() -> bool>(mut done: F) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !done() {
        assert!(tokio::time::Instant::now() < deadline, "condition not reached in time");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
