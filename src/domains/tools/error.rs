//! Tool-specific error types.

use thiserror::Error;

use crate::domains::services::ServiceError;

/// Errors that can occur while dispatching a tool call.
///
/// Every variant is turned into an `"Error: <message>"` envelope by the
/// dispatcher; none of them reach the transport as a protocol error.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments did not match the tool's parameter struct.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: &'static str, message: String },

    /// The domain service rejected the request.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The service result could not be rendered as JSON.
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool,
            message: msg.into(),
        }
    }

    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::Service(ServiceError::NotFound { .. }) => "not_found",
            Self::Service(ServiceError::InvalidInput(_)) => "invalid_input",
            Self::Serialization(_) => "serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_codes() {
        let err = ToolError::unknown_tool("nonexistent_tool");
        assert_eq!(err.to_string(), "Unknown tool: nonexistent_tool");
        assert_eq!(err.code(), "unknown_tool");

        let err: ToolError = ServiceError::invalid_input("empty").into();
        assert_eq!(err.to_string(), "Invalid input: empty");
        assert_eq!(err.code(), "invalid_input");
    }
}
