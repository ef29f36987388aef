//! Side-by-side component comparison.

use serde_json::{Value, json};

use super::component::{REACT_PACKAGE, lookup};
use super::{FrameworkAware, FrameworkMode, ServiceResult};
use crate::domains::knowledge::ComponentDoc;

/// Compares two components. Content is React only.
#[derive(Debug, Clone)]
pub struct ComparisonService {
    use_react_default: bool,
}

impl FrameworkAware for ComparisonService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl ComparisonService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    pub async fn compare_components(
        &self,
        component_a: &str,
        component_b: &str,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        match mode {
            FrameworkMode::Vanilla => {
                return Ok(json!({
                    "mode": mode.uswds_label(),
                    "message": "Component comparison is only available in React mode. \
                                Call get_component_info for each component to compare vanilla markup.",
                }));
            }
            FrameworkMode::Tailwind => {
                return Ok(json!({
                    "mode": mode.uswds_label(),
                    "message": "Component comparison is not supported for Tailwind-USWDS; it is only available in React mode.",
                }));
            }
            FrameworkMode::React => {}
        }

        let a = lookup(component_a)?;
        let b = lookup(component_b)?;

        let shared_variants = intersect(a.variants, b.variants);
        let a_related_to_b = a.related.contains(&b.id) || b.related.contains(&a.id);

        Ok(json!({
            "mode": mode.uswds_label(),
            "components": [summary(a), summary(b)],
            "comparison": {
                "sameCategory": a.category == b.category,
                "sharedVariants": shared_variants,
                "related": a_related_to_b,
                "sharedRelated": intersect(a.related, b.related),
            },
            "recommendation": recommendation(a, b),
        }))
    }
}

fn intersect(a: &[&'static str], b: &[&'static str]) -> Vec<&'static str> {
    a.iter().filter(|x| b.contains(x)).copied().collect()
}

fn summary(doc: &ComponentDoc) -> Value {
    json!({
        "id": doc.id,
        "name": doc.name,
        "component": doc.react_component,
        "category": doc.category,
        "description": doc.description,
        "variants": doc.variants,
        "import": format!("import {{ {} }} from '{}';", doc.react_component, REACT_PACKAGE),
    })
}

fn recommendation(a: &ComponentDoc, b: &ComponentDoc) -> String {
    if a.id == b.id {
        return format!("Both inputs resolve to {}.", a.react_component);
    }
    if a.category == b.category {
        format!(
            "{} and {} are both {} components. Use {} when {} Use {} when {}",
            a.react_component,
            b.react_component,
            a.category,
            a.react_component,
            lowercase_first(a.description),
            b.react_component,
            lowercase_first(b.description),
        )
    } else {
        format!(
            "{} ({}) and {} ({}) serve different purposes and are often combined.",
            a.react_component, a.category, b.react_component, b.category
        )
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::services::ServiceError;

    #[tokio::test]
    async fn test_compare_in_react_mode() {
        let service = ComparisonService::new(true);
        let result = service.compare_components("radio", "checkbox", None).await.unwrap();
        assert_eq!(result["mode"], "react-uswds");
        assert_eq!(result["comparison"]["sameCategory"], true);
        assert_eq!(result["comparison"]["related"], true);
        assert_eq!(result["components"][0]["component"], "Radio");
    }

    #[tokio::test]
    async fn test_vanilla_is_degraded() {
        let service = ComparisonService::new(false);
        let result = service.compare_components("button", "card", None).await.unwrap();
        assert_eq!(result["mode"], "vanilla-uswds");
        assert!(result["message"].as_str().unwrap().contains("only available in React mode"));
    }

    #[tokio::test]
    async fn test_tailwind_is_degraded() {
        let service = ComparisonService::new(true);
        let result = service
            .compare_components("button", "card", Some(FrameworkMode::Tailwind))
            .await
            .unwrap();
        assert_eq!(result["mode"], "tailwind-uswds");
        assert!(result.get("components").is_none());
    }

    #[tokio::test]
    async fn test_unknown_component() {
        let service = ComparisonService::new(true);
        let err = service.compare_components("button", "carousel", None).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
