//! Transport service - picks the transport and hands it the server.

use tracing::info;

use super::{TransportConfig, TransportError, TransportResult};
use crate::core::Config;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Build the server for the configured transport and run it.
    ///
    /// Registry validation happens here, before any request is accepted;
    /// a malformed registry is returned as an initialization error.
    /// This method blocks until the transport is shut down.
    pub async fn run(self, config: Config) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => {
                let server = crate::core::McpServer::new(config)
                    .map_err(|e| TransportError::init(e.to_string()))?;
                StdioTransport::run(server).await
            }
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => {
                let context = std::sync::Arc::new(crate::core::WarmContext::new(config));
                context
                    .server()
                    .await
                    .map_err(|e| TransportError::init(e.to_string()))?;
                HttpTransport::new(cfg).run(context).await
            }
        }
    }
}
