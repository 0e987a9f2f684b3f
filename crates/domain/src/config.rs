//! Application configuration structures
//!
//! Populated by the infra config loader from environment variables or a
//! config file. See `focusflow-infra::config::loader` for the loading
//! strategy.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub auth: AuthConfig,
}

/// SQLite database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Socket address to bind, e.g. `127.0.0.1:3000`
    pub addr: String,
}

/// Token issuance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing access tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
}

/// Seven days, matching the issued token lifetime
fn default_token_ttl() -> u64 {
    7 * 24 * 60 * 60
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { addr: "127.0.0.1:3000".to_string() }
    }
}
