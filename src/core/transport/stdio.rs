//! STDIO transport implementation.
//!
//! rmcp over standard input/output, the default MCP mode. stdout carries
//! protocol frames only; all logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            server = server.name(),
            tools = server.registry().len(),
            "Ready - communicating via stdin/stdout"
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!(?reason, "STDIO transport finished");
        Ok(())
    }
}
