//! Instructor Directory - a review-aggregating instructor registry
//!
//! Serves instructor records and their reviews from an in-memory cache backed
//! by a remote document store as the durable source of truth.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::InstructorService;
pub use tasks::spawn_refresh_task;
