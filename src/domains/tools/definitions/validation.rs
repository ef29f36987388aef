//! Markup validation tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `validate_uswds_code`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValidateUswdsCodeParams {
    /// HTML or JSX snippet to check.
    pub code: String,

    /// Component the snippet is expected to implement.
    #[serde(default)]
    pub component: Option<String>,

    /// Dialect of the snippet. Defaults to the server mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct ValidateUswdsCodeTool;

impl ValidateUswdsCodeTool {
    pub const NAME: &'static str = "validate_uswds_code";

    pub const DESCRIPTION: &'static str = "Validate an HTML or JSX snippet against USWDS conventions and accessibility rules. Returns errors, warnings and suggestions.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<ValidateUswdsCodeParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(len = params.code.len(), component = ?params.component))]
    pub async fn execute(params: ValidateUswdsCodeParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .validation
            .validate_uswds_code(&params.code, params.component.as_deref(), params.framework)
            .await
    }
}
