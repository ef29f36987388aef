//! Component suggestion tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `suggest_components`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestComponentsParams {
    /// The UI to build, in plain words.
    pub description: String,

    /// Override the default framework mode. Suggestions are React only.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct SuggestComponentsTool;

impl SuggestComponentsTool {
    pub const NAME: &'static str = "suggest_components";

    pub const DESCRIPTION: &'static str = "Suggest React USWDS components for a described user interface, with the reason each one fits.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<SuggestComponentsParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all)]
    pub async fn execute(params: SuggestComponentsParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .suggestion
            .suggest_components(&params.description, params.framework)
            .await
    }
}
