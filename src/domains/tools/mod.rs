//! Tools domain module.
//!
//! Tools are the operations MCP clients call. This module turns a tool name
//! and raw JSON arguments into a domain service call and a result envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - params struct, descriptor and `execute()` per tool
//! - `registry.rs` - validated descriptor list, the source of truth for `tools/list`
//! - `dispatcher.rs` - closed `ToolName` enum and the `dispatch` entry point
//! - `result.rs` - the `{content, isError}` envelope
//! - `router.rs` - rmcp ToolRouter for the stdio transport
//! - `error.rs` - tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add params and a tool struct under `definitions/`
//! 2. Add a `ToolName` variant; the compiler then points at the `as_str`,
//!    `descriptor` and `invoke` arms to fill in
//! 3. Append the variant to `ToolName::ALL`

pub mod definitions;
pub mod dispatcher;
mod error;
pub mod registry;
pub mod result;
pub mod router;

pub use dispatcher::{Dispatcher, ToolName, dispatch, dispatch_tool};
pub use error::ToolError;
pub use registry::{RegistryError, ToolDescriptor, ToolRegistry};
pub use result::{TextBlock, ToolResult};
pub use router::build_tool_router;
