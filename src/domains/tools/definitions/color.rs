//! Color contrast tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `check_color_contrast`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckColorContrastParams {
    /// Text color: `#rgb`, `#rrggbb` or a USWDS color token such as "primary".
    pub foreground: String,

    /// Background color in the same formats.
    pub background: String,
}

pub struct CheckColorContrastTool;

impl CheckColorContrastTool {
    pub const NAME: &'static str = "check_color_contrast";

    pub const DESCRIPTION: &'static str = "Check the WCAG 2.1 contrast ratio between two colors (hex values or USWDS color tokens) and report AA/AAA compliance.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<CheckColorContrastParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(fg = %params.foreground, bg = %params.background))]
    pub async fn execute(params: CheckColorContrastParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .color
            .check_color_contrast(&params.foreground, &params.background)
            .await
    }
}
