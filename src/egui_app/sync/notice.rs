//! Transient user-visible messages

use std::time::{Duration, Instant};

/// An error shown to the user until it expires or is dismissed
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub created_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
