//! Tailwind-USWDS documentation service.

use serde_json::{Value, json};

use super::{FrameworkAware, ServiceError, ServiceResult};
use crate::domains::knowledge::tailwind::{
    GETTING_STARTED, ICONS, JAVASCRIPT, TAILWIND_COLOR_GROUPS, TYPOGRAPHY, section,
};
use crate::domains::knowledge::{TAILWIND_COMPONENTS, TAILWIND_SECTIONS, TailwindSection, find_color_token, normalize_key};

const DEFAULT_SEARCH_LIMIT: usize = 5;
const MAX_SEARCH_LIMIT: usize = 20;
const SNIPPET_RADIUS: usize = 80;

/// Serves the Tailwind-USWDS integration docs. Framework independent.
#[derive(Debug, Clone)]
pub struct TailwindUswdsService {
    use_react_default: bool,
}

impl FrameworkAware for TailwindUswdsService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl TailwindUswdsService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    fn section(&self, id: &str) -> ServiceResult<&'static TailwindSection> {
        section(id).ok_or_else(|| {
            ServiceError::not_found("Documentation section", id, TAILWIND_SECTIONS.iter().map(|s| s.id))
        })
    }

    /// The getting-started guide as markdown.
    pub async fn getting_started(&self) -> ServiceResult<Value> {
        Ok(Value::String(self.section(GETTING_STARTED)?.content.to_string()))
    }

    /// One component's Tailwind-USWDS docs, or an index of all of them.
    pub async fn component(&self, name: Option<&str>) -> ServiceResult<Value> {
        let Some(name) = name.map(normalize_key).filter(|n| !n.is_empty()) else {
            return Ok(json!({
                "total": TAILWIND_COMPONENTS.len(),
                "components": TAILWIND_COMPONENTS
                    .iter()
                    .map(|c| json!({
                        "id": c.id,
                        "name": c.name,
                        "requiresJavascript": c.requires_javascript,
                    }))
                    .collect::<Vec<_>>(),
            }));
        };

        TAILWIND_COMPONENTS
            .iter()
            .find(|c| c.id == name)
            .map(|c| json!(c))
            .ok_or_else(|| {
                ServiceError::not_found("Tailwind-USWDS component", name, TAILWIND_COMPONENTS.iter().map(|c| c.id))
            })
    }

    pub async fn javascript(&self) -> ServiceResult<Value> {
        let doc = self.section(JAVASCRIPT)?;
        let interactive: Vec<&str> = TAILWIND_COMPONENTS
            .iter()
            .filter(|c| c.requires_javascript)
            .map(|c| c.id)
            .collect();
        Ok(json!({
            "title": doc.title,
            "content": doc.content,
            "componentsRequiringJavascript": interactive,
        }))
    }

    /// Color utility classes, optionally for one group (`theme`, `state`, `base`).
    pub async fn colors(&self, category: Option<&str>) -> ServiceResult<Value> {
        let category = category.map(normalize_key).filter(|c| !c.is_empty() && c != "all");
        if let Some(ref wanted) = category {
            if !TAILWIND_COLOR_GROUPS.iter().any(|(id, _)| *id == wanted.as_str()) {
                return Err(ServiceError::not_found(
                    "Color category",
                    wanted.clone(),
                    TAILWIND_COLOR_GROUPS.iter().map(|(id, _)| *id),
                ));
            }
        }

        let groups: Vec<Value> = TAILWIND_COLOR_GROUPS
            .iter()
            .filter(|(id, _)| category.as_deref().is_none_or(|c| c == *id))
            .map(|(id, tokens)| {
                let colors: Vec<Value> = tokens
                    .iter()
                    .map(|token| {
                        json!({
                            "token": token,
                            "hex": find_color_token(token),
                            "text": format!("text-{token}"),
                            "background": format!("bg-{token}"),
                            "border": format!("border-{token}"),
                        })
                    })
                    .collect();
                json!({ "category": id, "colors": colors })
            })
            .collect();

        Ok(json!({
            "categories": groups,
            "note": "Use token utilities instead of the default Tailwind palette or arbitrary hex values.",
        }))
    }

    pub async fn icons(&self) -> ServiceResult<Value> {
        let doc = self.section(ICONS)?;
        Ok(json!({ "title": doc.title, "content": doc.content }))
    }

    pub async fn typography(&self) -> ServiceResult<Value> {
        let doc = self.section(TYPOGRAPHY)?;
        Ok(json!({ "title": doc.title, "content": doc.content }))
    }

    /// Full-text search over sections and component docs.
    pub async fn search_docs(&self, query: &str, limit: Option<usize>) -> ServiceResult<Value> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ServiceError::invalid_input("Search query must not be empty"));
        }
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT);

        let sections = TAILWIND_SECTIONS.iter().filter_map(|s| {
            let hits = occurrences(s.title, &needle) * 3 + occurrences(s.content, &needle);
            (hits > 0).then(|| {
                (hits, json!({
                    "type": "section",
                    "id": s.id,
                    "title": s.title,
                    "snippet": snippet(s.content, &needle),
                }))
            })
        });
        let components = TAILWIND_COMPONENTS.iter().filter_map(|c| {
            let hits = occurrences(c.id, &needle) * 3
                + occurrences(c.name, &needle) * 3
                + occurrences(c.notes, &needle)
                + c.classes.iter().map(|cls| occurrences(cls, &needle)).sum::<usize>();
            (hits > 0).then(|| {
                (hits, json!({
                    "type": "component",
                    "id": c.id,
                    "title": c.name,
                    "snippet": c.notes,
                }))
            })
        });

        let mut results: Vec<(usize, Value)> = sections.chain(components).collect();
        results.sort_by(|a, b| b.0.cmp(&a.0));
        let total = results.len();
        let results: Vec<Value> = results
            .into_iter()
            .take(limit)
            .map(|(score, mut hit)| {
                if let Some(obj) = hit.as_object_mut() {
                    obj.insert("score".to_string(), json!(score));
                }
                hit
            })
            .collect();

        Ok(json!({
            "query": query,
            "total": total,
            "results": results,
        }))
    }
}

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.to_lowercase().matches(needle).count()
}

/// Text around the first match, cut on char boundaries.
fn snippet(content: &str, needle: &str) -> String {
    let lower = content.to_lowercase();
    // Lowercasing can change byte offsets for non-ASCII text.
    if lower.len() != content.len() {
        return content.chars().take(SNIPPET_RADIUS * 2).collect();
    }
    let Some(at) = lower.find(needle) else {
        return content.chars().take(SNIPPET_RADIUS * 2).collect();
    };
    let mut start = at.saturating_sub(SNIPPET_RADIUS);
    while !content.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (at + needle.len() + SNIPPET_RADIUS).min(content.len());
    while !content.is_char_boundary(end) {
        end += 1;
    }
    content[start..end].trim().replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_getting_started_is_markdown_string() {
        let service = TailwindUswdsService::new(false);
        let doc = service.getting_started().await.unwrap();
        assert!(doc.as_str().unwrap().starts_with("# Getting started"));
    }

    #[tokio::test]
    async fn test_component_index_and_detail() {
        let service = TailwindUswdsService::new(false);
        let index = service.component(None).await.unwrap();
        assert_eq!(index["total"], TAILWIND_COMPONENTS.len());

        let modal = service.component(Some("Modal")).await.unwrap();
        assert_eq!(modal["id"], "modal");
        assert_eq!(modal["requiresJavascript"], true);

        assert!(service.component(Some("carousel")).await.is_err());
    }

    #[tokio::test]
    async fn test_colors_filter() {
        let service = TailwindUswdsService::new(false);
        let state = service.colors(Some("state")).await.unwrap();
        let groups = state["categories"].as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["colors"][0]["text"], "text-info");

        assert!(service.colors(Some("neon")).await.is_err());
    }

    #[tokio::test]
    async fn test_search_docs() {
        let service = TailwindUswdsService::new(false);
        let result = service.search_docs("install", Some(3)).await.unwrap();
        assert!(result["total"].as_u64().unwrap() >= 1);
        assert_eq!(result["results"][0]["id"], GETTING_STARTED);

        assert!(service.search_docs("   ", None).await.is_err());
    }

    #[tokio::test]
    async fn test_javascript_lists_interactive_components() {
        let service = TailwindUswdsService::new(false);
        let result = service.javascript().await.unwrap();
        let interactive = result["componentsRequiringJavascript"].as_array().unwrap();
        assert!(interactive.iter().any(|c| c == "accordion"));
    }
}
