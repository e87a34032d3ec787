//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Staleness threshold for the full cached record set, in seconds
    pub cache_ttl_secs: u64,
    /// Per-request timeout for remote store calls, in seconds
    pub store_timeout_secs: u64,
    /// Background full-refresh interval in seconds
    pub refresh_interval_secs: u64,
    /// Base URL of the remote document store
    pub store_base_url: String,
    /// Document collection holding instructor records
    pub store_collection: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECS` - Cached record-set staleness threshold (default: 1800)
    /// - `STORE_TIMEOUT_SECS` - Remote store call timeout (default: 10)
    /// - `REFRESH_INTERVAL_SECS` - Background refresh frequency (default: 300)
    /// - `STORE_BASE_URL` - Document store base URL (default: http://localhost:8200)
    /// - `STORE_COLLECTION` - Collection name (default: instructors)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            store_timeout_secs: env::var("STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            refresh_interval_secs: env::var("REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            store_base_url: env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8200".to_string()),
            store_collection: env::var("STORE_COLLECTION")
                .unwrap_or_else(|_| "instructors".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl_secs: 1800,
            store_timeout_secs: 10,
            refresh_interval_secs: 300,
            store_base_url: "http://localhost:8200".to_string(),
            store_collection: "instructors".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.store_timeout_secs, 10);
        assert_eq!(config.refresh_interval_secs, 300);
        assert_eq!(config.store_collection, "instructors");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("STORE_TIMEOUT_SECS");
        env::remove_var("REFRESH_INTERVAL_SECS");
        env::remove_var("STORE_BASE_URL");
        env::remove_var("STORE_COLLECTION");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.store_timeout_secs, 10);
        assert_eq!(config.refresh_interval_secs, 300);
        assert_eq!(config.store_base_url, "http://localhost:8200");
        assert_eq!(config.store_collection, "instructors");
    }
}
