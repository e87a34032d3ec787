//! Response DTOs for the instructor directory API
//!
//! Defines the structure of outgoing HTTP response bodies that are not plain
//! instructor records.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Generic success message body (e.g. after a delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response body for the cache introspection endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of instructor records currently cached
    pub entries: usize,
    /// Time of the last successful full refresh, RFC 3339, null before the first
    pub last_refresh: Option<String>,
}

impl CacheStatsResponse {
    /// Creates a new CacheStatsResponse
    pub fn new(entries: usize, last_refresh: Option<DateTime<Utc>>) -> Self {
        Self {
            entries,
            last_refresh: last_refresh.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
