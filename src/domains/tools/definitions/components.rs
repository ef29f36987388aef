//! Component catalog tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `list_components`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListComponentsParams {
    /// Restrict to one category (forms, navigation, feedback, content, actions, site-identity).
    #[serde(default)]
    pub category: Option<String>,

    /// Override the default framework mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

/// Lists the USWDS component catalog.
pub struct ListComponentsTool;

impl ListComponentsTool {
    pub const NAME: &'static str = "list_components";

    pub const DESCRIPTION: &'static str = "List available USWDS components, optionally filtered by category. Returns usage hints for the selected framework mode (react, vanilla or tailwind).";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<ListComponentsParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(category = ?params.category))]
    pub async fn execute(params: ListComponentsParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .components
            .list_components(params.category.as_deref(), params.framework)
            .await
    }
}

/// Parameters for `get_component_info`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetComponentInfoParams {
    /// Component id, display name or React component name (e.g. "date-picker", "DatePicker").
    pub component: String,

    /// Include example code. Defaults to true.
    #[serde(default)]
    pub include_examples: Option<bool>,

    /// Override the default framework mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

/// Detailed documentation for one component.
pub struct GetComponentInfoTool;

impl GetComponentInfoTool {
    pub const NAME: &'static str = "get_component_info";

    pub const DESCRIPTION: &'static str = "Get detailed documentation for a USWDS component: variants, accessibility guidance, related components, implementation details and example code.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<GetComponentInfoParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(component = %params.component))]
    pub async fn execute(params: GetComponentInfoParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .components
            .get_component_info(
                &params.component,
                params.include_examples.unwrap_or(true),
                params.framework,
            )
            .await
    }
}
