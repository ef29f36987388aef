//! Code generation tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `generate_component_code`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateComponentCodeParams {
    /// Component to generate.
    pub component: String,

    /// Template values: `label`, `variant`, `id`, `heading`, `text`, `options`.
    #[serde(default)]
    pub props: Option<Map<String, Value>>,

    /// Override the default framework mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct GenerateComponentCodeTool;

impl GenerateComponentCodeTool {
    pub const NAME: &'static str = "generate_component_code";

    pub const DESCRIPTION: &'static str = "Generate ready-to-use code for a USWDS component from optional props, in React, vanilla HTML or Tailwind-USWDS flavor.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<GenerateComponentCodeParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(component = %params.component))]
    pub async fn execute(params: GenerateComponentCodeParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .codegen
            .generate_component_code(&params.component, params.props.as_ref(), params.framework)
            .await
    }
}
