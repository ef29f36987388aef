//! Icon search service.

use serde_json::{Value, json};

use super::{FrameworkAware, FrameworkMode, ServiceError, ServiceResult};
use crate::domains::knowledge::icons::icon_categories;
use crate::domains::knowledge::{ICONS, IconDoc, normalize_key};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct IconService {
    use_react_default: bool,
}

impl FrameworkAware for IconService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl IconService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    /// Search the icon set by name or keyword, optionally within one category.
    pub async fn search_icons(
        &self,
        query: Option<&str>,
        category: Option<&str>,
        limit: Option<usize>,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let category = category.map(normalize_key).filter(|c| !c.is_empty() && c != "all");

        if let Some(ref wanted) = category {
            if !icon_categories().contains(&wanted.as_str()) {
                return Err(ServiceError::not_found("Icon category", wanted.clone(), icon_categories()));
            }
        }

        let matched: Vec<&IconDoc> = ICONS
            .iter()
            .filter(|icon| category.as_deref().is_none_or(|c| icon.category == c))
            .filter(|icon| query.is_none_or(|q| icon.matches(q)))
            .collect();

        let icons: Vec<Value> = matched
            .iter()
            .take(limit)
            .map(|icon| {
                json!({
                    "name": icon.name,
                    "category": icon.category,
                    "keywords": icon.keywords,
                    "usage": usage(icon, mode),
                })
            })
            .collect();

        Ok(json!({
            "mode": mode.uswds_label(),
            "query": query,
            "category": category,
            "total": matched.len(),
            "returned": icons.len(),
            "icons": icons,
            "categories": icon_categories(),
        }))
    }
}

fn usage(icon: &IconDoc, mode: FrameworkMode) -> String {
    match mode {
        FrameworkMode::React => format!(
            "import {{ Icon }} from '@trussworks/react-uswds';\n<Icon.{} aria-label=\"{}\" />",
            icon.react_name(),
            icon.name.replace('_', " ")
        ),
        FrameworkMode::Vanilla => format!(
            "<svg class=\"usa-icon\" aria-hidden=\"true\" focusable=\"false\" role=\"img\">\n  <use href=\"/assets/img/sprite.svg#{}\"></use>\n</svg>",
            icon.name
        ),
        FrameworkMode::Tailwind => format!(
            "<svg class=\"usa-icon w-3 h-3 text-primary\" aria-hidden=\"true\" focusable=\"false\" role=\"img\">\n  <use href=\"/assets/img/sprite.svg#{}\"></use>\n</svg>",
            icon.name
        ),
    }
}
