//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Temp-dir store fixtures and a ready `TestServer`
//! - A live server on an ephemeral port for client tests
//! - Custom assertion macros
#![allow(dead_code)]

pub mod assertions;
pub mod database;

// Re-export commonly used utilities
pub use database::*;
