//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every route forwards to the dispatcher, so the stdio transport returns
//! exactly the envelope the HTTP transport does.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

use super::dispatcher::{ToolName, dispatch_tool};
use super::registry::ToolRegistry;
use crate::domains::services::ServiceBag;

/// Build the tool router with one route per registered tool.
pub fn build_tool_router<S>(registry: &ToolRegistry, services: Arc<ServiceBag>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .iter()
        .filter_map(|descriptor| {
            let tool = descriptor.name.parse::<ToolName>().ok()?;
            Some(create_route(tool, descriptor.to_tool(), services.clone()))
        })
        .fold(ToolRouter::new(), |router, route| router.with_route(route))
}

fn create_route<S>(tool: ToolName, model: Tool, services: Arc<ServiceBag>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(model, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().map(Value::Object).unwrap_or(Value::Null);
        let services = services.clone();
        async move {
            let result: CallToolResult = dispatch_tool(tool, args, &services).await.into();
            Ok::<_, McpError>(result)
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let registry = ToolRegistry::new().unwrap();
        let router: ToolRouter<TestServer> =
            build_tool_router(&registry, Arc::new(ServiceBag::new(false)));
        let tools = router.list_all();
        assert_eq!(tools.len(), 17);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_components"));
        assert!(names.contains(&"check_color_contrast"));
        assert!(names.contains(&"search_tailwind_uswds_docs"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = ToolRegistry::new().unwrap();
        let router: ToolRouter<TestServer> =
            build_tool_router(&registry, Arc::new(ServiceBag::new(false)));
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry.len(), router_names.len());
        for name in registry.names() {
            assert!(router_names.contains(&name));
        }
    }
}
