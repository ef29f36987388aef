//! Layout suggestion tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `suggest_layout`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestLayoutParams {
    /// What the page is for, e.g. "benefits application form".
    pub description: String,

    /// Override the default framework mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct SuggestLayoutTool;

impl SuggestLayoutTool {
    pub const NAME: &'static str = "suggest_layout";

    pub const DESCRIPTION: &'static str = "Suggest a USWDS page layout pattern for a described page, with the components involved and starter code.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<SuggestLayoutParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all)]
    pub async fn execute(params: SuggestLayoutParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .layout
            .suggest_layout(&params.description, params.framework)
            .await
    }
}
