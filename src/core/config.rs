//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file when present) on top of defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Default framework mode for every domain service.
    pub framework: FrameworkConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// API key authentication (HTTP transport only).
    pub auth: AuthConfig,

    /// Tool response cache (HTTP transport only).
    pub cache: CacheConfig,

    /// Per-client rate limiting (HTTP transport only).
    pub rate_limit: RateLimitConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Framework defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Serve React (`@trussworks/react-uswds`) content when a call names no framework.
    pub use_react_default: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// API key authentication configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Key accepted by the in-memory user store.
    pub api_key: Option<String>,

    /// Require a key even when none is configured (every request is then rejected).
    pub required: bool,
}

impl AuthConfig {
    /// Whether HTTP requests must carry a valid key.
    pub fn is_enforced(&self) -> bool {
        self.required || self.api_key.is_some()
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("required", &self.required)
            .finish()
    }
}

/// Response cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of a cached tool result, in seconds.
    pub ttl_secs: u64,

    /// Maximum number of cached results. `0` disables the cache.
    pub max_entries: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn is_enabled(&self) -> bool {
        self.max_entries > 0 && self.ttl_secs > 0
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub enabled: bool,

    /// Requests allowed per client per window.
    pub max_requests: u32,

    /// Window length, in seconds.
    pub window_secs: u64,

    /// Maximum number of tracked clients.
    pub max_clients: u64,
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs.max(1))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            max_entries: 1_000,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 100,
            window_secs: 60,
            max_clients: 10_000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "uswds-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            framework: FrameworkConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Parse a boolean environment value. Accepts `true/false`, `1/0`, `yes/no`, `on/off`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    let raw = std::env::var(key).ok()?;
    let parsed = parse_bool(&raw);
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: expected a boolean", key, raw);
    }
    parsed
}

pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: not a valid number", key, raw);
    }
    parsed
}

pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = env_non_empty("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(react) = env_bool("USE_REACT_COMPONENTS") {
            config.framework.use_react_default = react;
        }

        // MCP_LOG_LEVEL wins over the shorter LOG_LEVEL.
        if let Some(level) = env_non_empty("MCP_LOG_LEVEL").or_else(|| env_non_empty("LOG_LEVEL")) {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.auth.api_key = env_non_empty("API_KEY");
        if let Some(required) = env_bool("MCP_AUTH_REQUIRED") {
            config.auth.required = required;
        }
        if config.auth.is_enforced() {
            info!("API key authentication enabled for HTTP requests");
        }

        if let Some(ttl) = env_parse("MCP_CACHE_TTL_SECS") {
            config.cache.ttl_secs = ttl;
        }
        if let Some(max) = env_parse("MCP_CACHE_MAX_ENTRIES") {
            config.cache.max_entries = max;
        }

        if let Some(enabled) = env_bool("MCP_RATE_LIMIT_ENABLED") {
            config.rate_limit.enabled = enabled;
        }
        if let Some(max) = env_parse("MCP_RATE_LIMIT_MAX_REQUESTS") {
            config.rate_limit.max_requests = max;
        }
        if let Some(window) = env_parse("MCP_RATE_LIMIT_WINDOW_SECS") {
            config.rate_limit.window_secs = window;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: &[&str] = &[
        "USE_REACT_COMPONENTS",
        "API_KEY",
        "MCP_AUTH_REQUIRED",
        "MCP_LOG_LEVEL",
        "LOG_LEVEL",
        "MCP_CACHE_MAX_ENTRIES",
        "MCP_RATE_LIMIT_MAX_REQUESTS",
    ];

    fn clear_env() {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_framework_and_auth_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("USE_REACT_COMPONENTS", "true");
            std::env::set_var("API_KEY", "test_key_12345");
            std::env::set_var("MCP_RATE_LIMIT_MAX_REQUESTS", "5");
            std::env::set_var("MCP_CACHE_MAX_ENTRIES", "0");
        }
        let config = Config::from_env();
        assert!(config.framework.use_react_default);
        assert_eq!(config.auth.api_key.as_deref(), Some("test_key_12345"));
        assert!(config.auth.is_enforced());
        assert_eq!(config.rate_limit.max_requests, 5);
        assert!(!config.cache.is_enabled());
        clear_env();
    }

    #[test]
    fn test_log_level_precedence() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("LOG_LEVEL", "debug");
        }
        assert_eq!(Config::from_env().logging.level, "debug");
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "trace");
        }
        assert_eq!(Config::from_env().logging.level, "trace");
        clear_env();
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("USE_REACT_COMPONENTS", "maybe");
            std::env::set_var("MCP_RATE_LIMIT_MAX_REQUESTS", "lots");
        }
        let config = Config::from_env();
        assert!(!config.framework.use_react_default);
        assert_eq!(config.rate_limit.max_requests, 100);
        clear_env();
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let auth = AuthConfig {
            api_key: Some("super_secret_key".to_string()),
            required: false,
        };
        let debug_str = format!("{:?}", auth);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("sure"), None);
    }

    #[test]
    fn test_default_auth_not_enforced() {
        assert!(!Config::default().auth.is_enforced());
    }
}
