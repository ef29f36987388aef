//! Design token tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `get_design_tokens`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetDesignTokensParams {
    /// Token category (color, spacing, font-size, font-family, breakpoints, shadow). Omit for all.
    #[serde(default)]
    pub category: Option<String>,

    /// Override the default framework mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct GetDesignTokensTool;

impl GetDesignTokensTool {
    pub const NAME: &'static str = "get_design_tokens";

    pub const DESCRIPTION: &'static str = "Get USWDS design tokens (colors, spacing, typography, breakpoints, shadows) with SCSS or Tailwind usage for each token.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<GetDesignTokensParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(category = ?params.category))]
    pub async fn execute(params: GetDesignTokensParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .tokens
            .get_design_tokens(params.category.as_deref(), params.framework)
            .await
    }
}
