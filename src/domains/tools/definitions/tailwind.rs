//! Tailwind-USWDS documentation tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::services::{ServiceBag, ServiceResult};
use crate::domains::tools::registry::ToolDescriptor;

/// Parameters for tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Parameters for `get_tailwind_uswds_component`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TailwindComponentParams {
    /// Component id. Omit to list every documented component.
    #[serde(default)]
    pub component: Option<String>,
}

/// Parameters for `get_tailwind_uswds_colors`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TailwindColorsParams {
    /// Color group: theme, state or base. Omit for all.
    #[serde(default)]
    pub category: Option<String>,
}

/// Parameters for `search_tailwind_uswds_docs`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchTailwindDocsParams {
    /// Words to search for.
    pub query: String,

    /// Maximum number of results (1-20, default 5).
    #[serde(default)]
    pub limit: Option<usize>,
}

pub struct TailwindGettingStartedTool;

impl TailwindGettingStartedTool {
    pub const NAME: &'static str = "get_tailwind_uswds_getting_started";

    pub const DESCRIPTION: &'static str = "Get the Tailwind-USWDS getting started guide: installation, configuration and first component, as markdown.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all)]
    pub async fn execute(_params: NoParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.getting_started().await
    }
}

pub struct TailwindComponentTool;

impl TailwindComponentTool {
    pub const NAME: &'static str = "get_tailwind_uswds_component";

    pub const DESCRIPTION: &'static str = "Get Tailwind-USWDS documentation for a component (classes, JavaScript needs, example), or list all documented components.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<TailwindComponentParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(component = ?params.component))]
    pub async fn execute(params: TailwindComponentParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.component(params.component.as_deref()).await
    }
}

pub struct TailwindJavascriptTool;

impl TailwindJavascriptTool {
    pub const NAME: &'static str = "get_tailwind_uswds_javascript";

    pub const DESCRIPTION: &'static str = "Get guidance on loading USWDS JavaScript with Tailwind-USWDS and which components need it.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all)]
    pub async fn execute(_params: NoParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.javascript().await
    }
}

pub struct TailwindColorsTool;

impl TailwindColorsTool {
    pub const NAME: &'static str = "get_tailwind_uswds_colors";

    pub const DESCRIPTION: &'static str = "Get Tailwind-USWDS color utilities (text, background, border) for the USWDS theme, state and base palettes.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<TailwindColorsParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(category = ?params.category))]
    pub async fn execute(params: TailwindColorsParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.colors(params.category.as_deref()).await
    }
}

pub struct TailwindIconsTool;

impl TailwindIconsTool {
    pub const NAME: &'static str = "get_tailwind_uswds_icons";

    pub const DESCRIPTION: &'static str = "Get guidance on using the USWDS icon sprite with Tailwind-USWDS sizing and color utilities.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all)]
    pub async fn execute(_params: NoParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.icons().await
    }
}

pub struct TailwindTypographyTool;

impl TailwindTypographyTool {
    pub const NAME: &'static str = "get_tailwind_uswds_typography";

    pub const DESCRIPTION: &'static str = "Get Tailwind-USWDS typography utilities for USWDS font families, sizes and prose styles.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all)]
    pub async fn execute(_params: NoParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.typography().await
    }
}

pub struct SearchTailwindDocsTool;

impl SearchTailwindDocsTool {
    pub const NAME: &'static str = "search_tailwind_uswds_docs";

    pub const DESCRIPTION: &'static str = "Full-text search across the Tailwind-USWDS documentation sections and component notes.";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::for_params::<SearchTailwindDocsParams>(Self::NAME, Self::DESCRIPTION)
    }

    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(params: SearchTailwindDocsParams, services: &ServiceBag) -> ServiceResult<Value> {
        services.tailwind.search_docs(&params.query, params.limit).await
    }
}
