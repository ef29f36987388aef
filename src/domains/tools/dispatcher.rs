//! Tool Dispatcher - from a tool call to a result envelope.
//!
//! `dispatch` is the one request-handling path shared by the stdio router
//! and the HTTP handler. It never fails: unknown tools, bad arguments and
//! service errors all come back as `isError` envelopes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::definitions::*;
use super::error::ToolError;
use super::registry::ToolDescriptor;
use super::result::ToolResult;
use crate::domains::services::ServiceBag;

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ListComponents,
    GetComponentInfo,
    GetDesignTokens,
    ValidateUswdsCode,
    CheckColorContrast,
    SearchIcons,
    SuggestLayout,
    SuggestComponents,
    CompareComponents,
    GenerateComponentCode,
    TailwindGettingStarted,
    TailwindComponent,
    TailwindJavascript,
    TailwindColors,
    TailwindIcons,
    TailwindTypography,
    SearchTailwindDocs,
}

impl ToolName {
    /// Registration order.
    pub const ALL: [ToolName; 17] = [
        Self::ListComponents,
        Self::GetComponentInfo,
        Self::GetDesignTokens,
        Self::ValidateUswdsCode,
        Self::CheckColorContrast,
        Self::SearchIcons,
        Self::SuggestLayout,
        Self::SuggestComponents,
        Self::CompareComponents,
        Self::GenerateComponentCode,
        Self::TailwindGettingStarted,
        Self::TailwindComponent,
        Self::TailwindJavascript,
        Self::TailwindColors,
        Self::TailwindIcons,
        Self::TailwindTypography,
        Self::SearchTailwindDocs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListComponents => ListComponentsTool::NAME,
            Self::GetComponentInfo => GetComponentInfoTool::NAME,
            Self::GetDesignTokens => GetDesignTokensTool::NAME,
            Self::ValidateUswdsCode => ValidateUswdsCodeTool::NAME,
            Self::CheckColorContrast => CheckColorContrastTool::NAME,
            Self::SearchIcons => SearchIconsTool::NAME,
            Self::SuggestLayout => SuggestLayoutTool::NAME,
            Self::SuggestComponents => SuggestComponentsTool::NAME,
            Self::CompareComponents => CompareComponentsTool::NAME,
            Self::GenerateComponentCode => GenerateComponentCodeTool::NAME,
            Self::TailwindGettingStarted => TailwindGettingStartedTool::NAME,
            Self::TailwindComponent => TailwindComponentTool::NAME,
            Self::TailwindJavascript => TailwindJavascriptTool::NAME,
            Self::TailwindColors => TailwindColorsTool::NAME,
            Self::TailwindIcons => TailwindIconsTool::NAME,
            Self::TailwindTypography => TailwindTypographyTool::NAME,
            Self::SearchTailwindDocs => SearchTailwindDocsTool::NAME,
        }
    }

    pub fn descriptor(&self) -> ToolDescriptor {
        match self {
            Self::ListComponents => ListComponentsTool::descriptor(),
            Self::GetComponentInfo => GetComponentInfoTool::descriptor(),
            Self::GetDesignTokens => GetDesignTokensTool::descriptor(),
            Self::ValidateUswdsCode => ValidateUswdsCodeTool::descriptor(),
            Self::CheckColorContrast => CheckColorContrastTool::descriptor(),
            Self::SearchIcons => SearchIconsTool::descriptor(),
            Self::SuggestLayout => SuggestLayoutTool::descriptor(),
            Self::SuggestComponents => SuggestComponentsTool::descriptor(),
            Self::CompareComponents => CompareComponentsTool::descriptor(),
            Self::GenerateComponentCode => GenerateComponentCodeTool::descriptor(),
            Self::TailwindGettingStarted => TailwindGettingStartedTool::descriptor(),
            Self::TailwindComponent => TailwindComponentTool::descriptor(),
            Self::TailwindJavascript => TailwindJavascriptTool::descriptor(),
            Self::TailwindColors => TailwindColorsTool::descriptor(),
            Self::TailwindIcons => TailwindIconsTool::descriptor(),
            Self::TailwindTypography => TailwindTypographyTool::descriptor(),
            Self::SearchTailwindDocs => SearchTailwindDocsTool::descriptor(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::unknown_tool(name))
    }
}

/// Deserialize typed params. `null` counts as `{}`.
fn parse<P: DeserializeOwned>(tool: ToolName, args: Value) -> Result<P, ToolError> {
    let args = match args {
        Value::Null => Value::Object(Map::new()),
        Value::Object(_) => args,
        other => {
            return Err(ToolError::invalid_arguments(
                tool.as_str(),
                format!("arguments must be a JSON object, got {}", json_kind(&other)),
            ));
        }
    };
    serde_json::from_value(args).map_err(|e| ToolError::invalid_arguments(tool.as_str(), e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

async fn invoke(tool: ToolName, args: Value, services: &ServiceBag) -> Result<Value, ToolError> {
    let payload = match tool {
        ToolName::ListComponents => ListComponentsTool::execute(parse(tool, args)?, services).await?,
        ToolName::GetComponentInfo => GetComponentInfoTool::execute(parse(tool, args)?, services).await?,
        ToolName::GetDesignTokens => GetDesignTokensTool::execute(parse(tool, args)?, services).await?,
        ToolName::ValidateUswdsCode => ValidateUswdsCodeTool::execute(parse(tool, args)?, services).await?,
        ToolName::CheckColorContrast => CheckColorContrastTool::execute(parse(tool, args)?, services).await?,
        ToolName::SearchIcons => SearchIconsTool::execute(parse(tool, args)?, services).await?,
        ToolName::SuggestLayout => SuggestLayoutTool::execute(parse(tool, args)?, services).await?,
        ToolName::SuggestComponents => SuggestComponentsTool::execute(parse(tool, args)?, services).await?,
        ToolName::CompareComponents => CompareComponentsTool::execute(parse(tool, args)?, services).await?,
        ToolName::GenerateComponentCode => {
            GenerateComponentCodeTool::execute(parse(tool, args)?, services).await?
        }
        ToolName::TailwindGettingStarted => {
            TailwindGettingStartedTool::execute(parse(tool, args)?, services).await?
        }
        ToolName::TailwindComponent => TailwindComponentTool::execute(parse(tool, args)?, services).await?,
        ToolName::TailwindJavascript => TailwindJavascriptTool::execute(parse(tool, args)?, services).await?,
        ToolName::TailwindColors => TailwindColorsTool::execute(parse(tool, args)?, services).await?,
        ToolName::TailwindIcons => TailwindIconsTool::execute(parse(tool, args)?, services).await?,
        ToolName::TailwindTypography => TailwindTypographyTool::execute(parse(tool, args)?, services).await?,
        ToolName::SearchTailwindDocs => SearchTailwindDocsTool::execute(parse(tool, args)?, services).await?,
    };
    Ok(payload)
}

/// Resolve `name`, run the tool and wrap the outcome.
pub async fn dispatch(name: &str, args: Value, services: &ServiceBag) -> ToolResult {
    match name.parse::<ToolName>() {
        Ok(tool) => dispatch_tool(tool, args, services).await,
        Err(err) => {
            warn!(tool = name, "Unknown tool requested");
            ToolResult::error(&err)
        }
    }
}

/// Run an already-resolved tool and wrap the outcome.
pub async fn dispatch_tool(tool: ToolName, args: Value, services: &ServiceBag) -> ToolResult {
    info!(tool = %tool, "Tool called");
    debug!(tool = %tool, arguments = %args, "Tool arguments");

    let outcome = match invoke(tool, args, services).await {
        Ok(payload) => ToolResult::success(payload),
        Err(err) => Err(err),
    };

    outcome.unwrap_or_else(|err| {
        warn!(tool = %tool, code = err.code(), error = %err, "Tool call failed");
        ToolResult::error(&err)
    })
}

/// A [`ServiceBag`] bound to the dispatch path.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    services: Arc<ServiceBag>,
}

impl Dispatcher {
    pub fn new(services: Arc<ServiceBag>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &Arc<ServiceBag> {
        &self.services
    }

    pub async fn dispatch(&self, name: &str, args: Value) -> ToolResult {
        dispatch(name, args, &self.services).await
    }

    pub async fn dispatch_tool(&self, tool: ToolName, args: Value) -> ToolResult {
        dispatch_tool(tool, args, &self.services).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn services() -> ServiceBag {
        ServiceBag::new(false)
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
            assert_eq!(tool.descriptor().name, tool.as_str());
        }
        assert!("list-components".parse::<ToolName>().is_err());
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = dispatch("nonexistent_tool", json!({}), &services()).await;
        assert!(result.is_error());
        assert_eq!(result.text(), "Error: Unknown tool: nonexistent_tool");
    }

    #[tokio::test]
    async fn test_null_arguments_are_empty_object() {
        let result = dispatch("list_components", Value::Null, &services()).await;
        assert!(!result.is_error(), "{}", result.text());
    }

    #[tokio::test]
    async fn test_non_object_arguments() {
        let result = dispatch("list_components", json!([1, 2]), &services()).await;
        assert!(result.is_error());
        assert!(result.text().starts_with("Error: Invalid arguments for list_components"));
        assert!(result.text().contains("an array"));
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let result = dispatch("get_component_info", json!({}), &services()).await;
        assert!(result.is_error());
        assert!(result.text().contains("component"));
    }

    #[tokio::test]
    async fn test_unknown_framework_value() {
        let result = dispatch("list_components", json!({ "framework": "svelte" }), &services()).await;
        assert!(result.is_error());
        assert!(result.text().contains("svelte"));
    }

    #[tokio::test]
    async fn test_service_error_becomes_envelope() {
        let result = dispatch("get_component_info", json!({ "component": "carousel" }), &services()).await;
        assert!(result.is_error());
        assert!(result.text().starts_with("Error: Component 'carousel' not found"));
    }

    #[tokio::test]
    async fn test_string_payload_is_verbatim() {
        let result = dispatch("get_tailwind_uswds_getting_started", json!({}), &services()).await;
        assert!(!result.is_error());
        assert!(result.text().starts_with("# Getting started"));
    }

    #[tokio::test]
    async fn test_dispatcher_struct() {
        let dispatcher = Dispatcher::new(Arc::new(ServiceBag::new(true)));
        let result = dispatcher
            .dispatch_tool(ToolName::ListComponents, json!({}))
            .await;
        let payload: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(payload["mode"], "react-uswds");
    }
}
