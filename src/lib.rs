//! USWDS MCP Server Library
//!
//! A Model Context Protocol server that answers questions about the U.S. Web
//! Design System: components, design tokens, icons, layouts, accessibility
//! checks and code generation, for React, vanilla HTML and Tailwind projects.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the server, transports and the HTTP
//!   request pipeline (auth, rate limiting, response cache)
//! - **domains**: business logic organized by bounded contexts
//!   - **knowledge**: the static USWDS knowledge store
//!   - **services**: framework-aware domain services over the store
//!   - **tools**: tool registry, dispatcher and rmcp router
//!
//! # Example
//!
//! ```rust,no_run
//! use uswds_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let result = server
//!         .call_tool("get_component_info", serde_json::json!({ "component": "alert" }))
//!         .await;
//!     println!("{}", result.text());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
