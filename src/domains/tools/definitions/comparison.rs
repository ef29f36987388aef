//! Component comparison tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `compare_components`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompareComponentsParams {
    /// First component.
    pub component_a: String,

    /// Second component.
    pub component_b: String,

    /// Override the default framework mode. Comparison is React only.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct CompareComponentsTool;

impl CompareComponentsTool {
    pub const NAME: &'static str = "compare_components";

    pub const DESCRIPTION: &'static str = "Compare two React USWDS components side by side: category, shared variants, relationship and when to use each.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<CompareComponentsParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(a = %params.component_a, b = %params.component_b))]
    pub async fn execute(params: CompareComponentsParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .comparison
            .compare_components(&params.component_a, &params.component_b, params.framework)
            .await
    }
}
