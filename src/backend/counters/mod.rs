//! Counter Module
//!
//! The counter app's backend, laid out like `backend::todos`. Counters are
//! addressed by their unique name rather than the numeric id.

pub mod model;
pub mod db;
pub mod mapper;
pub mod service;
pub mod handlers;

pub use handlers::*;
pub use model::CounterRow;
