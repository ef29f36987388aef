//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` owns the validated tool registry, the dispatcher over the
//! domain services and the rmcp tool router built from both. The stdio
//! transport drives it through rmcp; the HTTP handler calls
//! [`McpServer::list_tools`] and [`McpServer::call_tool`] directly.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Error as CoreError;
use crate::domains::services::ServiceBag;
use crate::domains::tools::{Dispatcher, ToolRegistry, ToolResult, build_tool_router};

const INSTRUCTIONS: &str = "USWDS design-system assistant. Look up components, design tokens, icons \
and layouts, validate markup, check color contrast and generate component code. Most tools accept \
an optional `framework` of `react`, `vanilla` or `tailwind`; the Tailwind tools cover the USWDS \
Tailwind plugin.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Validated tool descriptors, in registration order.
    registry: Arc<ToolRegistry>,

    /// Tool dispatch over the domain services.
    dispatcher: Dispatcher,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Build and validate the server. A malformed registry is an error.
    pub fn new(config: Config) -> Result<Self, CoreError> {
        let config = Arc::new(config);
        let registry = Arc::new(ToolRegistry::new()?);
        let services = Arc::new(ServiceBag::new(config.framework.use_react_default));

        info!(
            tools = registry.len(),
            default_mode = %services.default_mode(),
            "Tool registry validated"
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry, services.clone()),
            dispatcher: Dispatcher::new(services),
            registry,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Tool descriptors in `tools/list` wire shape.
    pub fn list_tools(&self) -> Vec<Value> {
        self.registry
            .descriptors()
            .iter()
            .map(|d| {
                json!({
                    "name": d.name,
                    "description": d.description,
                    "inputSchema": d.input_schema,
                })
            })
            .collect()
    }

    /// Call a tool by name. Failures come back as error envelopes.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolResult {
        self.dispatcher.dispatch(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_server_lists_every_tool() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 17);
        assert_eq!(tools[0]["name"], "list_components");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[test]
    fn test_server_info_has_tools_only() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("USWDS"));
    }

    #[tokio::test]
    async fn test_call_tool() {
        let server = McpServer::new(Config::default()).unwrap();
        let result = server
            .call_tool("get_component_info", json!({ "component": "button" }))
            .await;
        assert!(!result.is_error(), "{}", result.text());
        assert!(result.text().contains("usa-button"));
    }
}
