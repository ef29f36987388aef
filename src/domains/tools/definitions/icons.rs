//! Icon search tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{FrameworkMode, ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for `search_icons`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchIconsParams {
    /// Text to match against icon names and keywords.
    #[serde(default)]
    pub query: Option<String>,

    /// Icon category (navigation, actions, status, communication, files, social, media).
    #[serde(default)]
    pub category: Option<String>,

    /// Maximum number of icons (1-100, default 20).
    #[serde(default)]
    pub limit: Option<usize>,

    /// Override the default framework mode.
    #[serde(default)]
    pub framework: Option<FrameworkMode>,
}

pub struct SearchIconsTool;

impl SearchIconsTool {
    pub const NAME: &'static str = "search_icons";

    pub const DESCRIPTION: &'static str = "Search the USWDS icon set by name, keyword or category and get usage markup for the selected framework mode.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<SearchIconsParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(query = ?params.query))]
    pub async fn execute(params: SearchIconsParams, services: &ServiceBag) -> ServiceResult<Value> {
        services
            .icons
            .search_icons(
                params.query.as_deref(),
                params.category.as_deref(),
                params.limit,
                params.framework,
            )
            .await
    }
}
