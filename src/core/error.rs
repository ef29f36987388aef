//! Error types and handling for the MCP server.
//!
//! Tool-level failures never show up here: the dispatcher turns them into
//! error envelopes. This type covers startup and transport failures.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool registry failed validation. Fatal at startup.
    #[error("Tool registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// Transport setup or shutdown failed.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::RegistryError;

    #[test]
    fn test_registry_error_message() {
        let err: Error = RegistryError::Duplicate("list_components".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Tool registry error: Duplicate tool name 'list_components'"
        );
    }
}
