//! Transport layer for the MCP server.
//!
//! - **STDIO**: rmcp over standard input/output (default) - feature: `stdio`
//! - **HTTP**: axum hosting the serverless event handler - feature: `http`
//!
//! Both transports dispatch tool calls through the same registry and
//! dispatcher. The HTTP transport adds authentication, rate limiting and
//! response caching in front of it.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
