//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache Refresh: Reloads the full instructor set from the record store at
//!   configured intervals

mod refresh;

pub use refresh::spawn_refresh_task;
