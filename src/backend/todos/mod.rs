//! Todo Module
//!
//! The todo app's backend: store row and queries, response mapping, the
//! service holding the business rules, and the HTTP handlers.

pub mod model;
pub mod db;
pub mod mapper;
pub mod service;
pub mod handlers;

pub use handlers::*;
pub use model::TodoRow;
