//! Transport selection, read from `MCP_TRANSPORT` and the `MCP_HTTP_*` variables.

use serde::{Deserialize, Serialize};

#[cfg(feature = "http")]
use crate::core::config::{env_bool, env_non_empty, env_parse};

/// Which transport serves the tool registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// rmcp over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// axum hosting the serverless event handler.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listener settings for the HTTP transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,

    #[serde(default = "HttpConfig::default_host")]
    pub host: String,

    /// Route that accepts JSON-RPC POSTs. Always starts with `/`.
    #[serde(default = "HttpConfig::default_rpc_path")]
    pub rpc_path: String,

    /// Attach a permissive CORS layer for browser clients.
    #[serde(default = "HttpConfig::default_cors")]
    pub enable_cors: bool,

    /// Take the client address from `X-Forwarded-For`. Only safe behind a
    /// proxy that overwrites the header; otherwise the peer address is used.
    #[serde(default)]
    pub trust_forwarded_for: bool,
}

#[cfg(feature = "http")]
impl HttpConfig {
    const DEFAULT_PORT: u16 = 8080;

    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_rpc_path() -> String {
        "/mcp".to_string()
    }

    fn default_cors() -> bool {
        true
    }

    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parse("MCP_HTTP_PORT").unwrap_or(defaults.port),
            host: env_non_empty("MCP_HTTP_HOST").unwrap_or(defaults.host),
            rpc_path: env_non_empty("MCP_HTTP_PATH")
                .map(|path| normalize_path(&path))
                .unwrap_or(defaults.rpc_path),
            enable_cors: env_bool("MCP_HTTP_CORS").unwrap_or(defaults.enable_cors),
            trust_forwarded_for: env_bool("MCP_HTTP_TRUST_PROXY").unwrap_or(defaults.trust_forwarded_for),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            host: Self::default_host(),
            rpc_path: Self::default_rpc_path(),
            enable_cors: Self::default_cors(),
            trust_forwarded_for: false,
        }
    }
}

#[cfg(feature = "http")]
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

impl TransportConfig {
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// `MCP_TRANSPORT=http` selects HTTP when compiled in; anything else
    /// falls back to the default transport.
    pub fn from_env() -> Self {
        let requested = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        #[cfg(feature = "http")]
        {
            if requested == "http" {
                return Self::Http(HttpConfig::from_env());
            }
        }

        if !requested.is_empty() && requested != "stdio" {
            tracing::warn!("Unknown or disabled MCP_TRANSPORT={:?}; using default", requested);
        }
        Self::default()
    }

    /// Human-readable summary for the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::default();
        assert!(config.is_stdio());
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_description() {
        let config = TransportConfig::http(9000, "0.0.0.0");
        assert!(!config.is_stdio());
        assert_eq!(config.description(), "HTTP on 0.0.0.0:9000/mcp");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("rpc"), "/rpc");
        assert_eq!(normalize_path("/api/mcp/"), "/api/mcp");
    }
}
