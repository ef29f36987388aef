//! Component catalog service.

use serde_json::{Value, json};
use tracing::debug;

use super::{FrameworkAware, FrameworkMode, ServiceError, ServiceResult};
use crate::domains::knowledge::components::component_categories;
use crate::domains::knowledge::{COMPONENTS, ComponentDoc, find_component, normalize_key};

/// npm package the React variants are imported from.
pub const REACT_PACKAGE: &str = "@trussworks/react-uswds";

/// Lists and documents USWDS components. All three modes are fully supported.
#[derive(Debug, Clone)]
pub struct ComponentService {
    use_react_default: bool,
}

impl FrameworkAware for ComponentService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl ComponentService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    /// List components, optionally restricted to one category.
    pub async fn list_components(
        &self,
        category: Option<&str>,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        let category = category.map(normalize_key).filter(|c| !c.is_empty() && c != "all");
        debug!(?category, %mode, "Listing components");

        if let Some(ref wanted) = category {
            if !component_categories().contains(&wanted.as_str()) {
                return Err(ServiceError::not_found(
                    "Category",
                    wanted.clone(),
                    component_categories(),
                ));
            }
        }

        let components: Vec<Value> = COMPONENTS
            .iter()
            .filter(|c| category.as_deref().is_none_or(|wanted| c.category == wanted))
            .map(|c| {
                json!({
                    "id": c.id,
                    "name": c.name,
                    "category": c.category,
                    "description": c.description,
                    "usage": usage(c, mode),
                })
            })
            .collect();

        Ok(json!({
            "mode": mode.uswds_label(),
            "category": category.unwrap_or_else(|| "all".to_string()),
            "total": components.len(),
            "categories": component_categories(),
            "components": components,
        }))
    }

    /// Full documentation for one component.
    pub async fn get_component_info(
        &self,
        component: &str,
        include_examples: bool,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        let doc = lookup(component)?;

        let mut info = json!({
            "mode": mode.uswds_label(),
            "id": doc.id,
            "name": doc.name,
            "category": doc.category,
            "description": doc.description,
            "variants": doc.variants,
            "accessibility": doc.accessibility,
            "related": doc.related,
            "implementation": implementation(doc, mode),
        });

        if include_examples {
            if let Some(obj) = info.as_object_mut() {
                obj.insert("example".to_string(), Value::String(example(doc, mode).to_string()));
            }
        }

        Ok(info)
    }
}

/// Resolve a component or fail with the list of valid ids.
pub(crate) fn lookup(component: &str) -> ServiceResult<&'static ComponentDoc> {
    if component.trim().is_empty() {
        return Err(ServiceError::invalid_input("Component name must not be empty"));
    }
    find_component(component).ok_or_else(|| {
        ServiceError::not_found("Component", component, COMPONENTS.iter().map(|c| c.id))
    })
}

/// Example code for a component in the given mode.
pub(crate) fn example(doc: &ComponentDoc, mode: FrameworkMode) -> &'static str {
    match mode {
        FrameworkMode::React => doc.react_example,
        FrameworkMode::Vanilla => doc.html_example,
        FrameworkMode::Tailwind => doc.tailwind_example,
    }
}

fn usage(doc: &ComponentDoc, mode: FrameworkMode) -> String {
    match mode {
        FrameworkMode::React => format!("<{} />", doc.react_component),
        FrameworkMode::Vanilla => format!("class=\"{}\"", doc.css_class),
        FrameworkMode::Tailwind => format!("class=\"{} ...utilities\"", doc.css_class),
    }
}

fn implementation(doc: &ComponentDoc, mode: FrameworkMode) -> Value {
    match mode {
        FrameworkMode::React => json!({
            "package": REACT_PACKAGE,
            "component": doc.react_component,
            "import": format!("import {{ {} }} from '{}';", doc.react_component, REACT_PACKAGE),
        }),
        FrameworkMode::Vanilla => json!({
            "cssClass": doc.css_class,
            "stylesheet": "@uswds/uswds/css/uswds.min.css",
            "script": "@uswds/uswds/js/uswds.min.js",
        }),
        FrameworkMode::Tailwind => json!({
            "cssClass": doc.css_class,
            "preset": "tailwind-uswds",
            "note": "Keep the usa- component classes and adjust with token-named utilities.",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_components() {
        let service = ComponentService::new(false);
        let result = service.list_components(None, None).await.unwrap();
        assert_eq!(result["mode"], "vanilla-uswds");
        assert_eq!(result["total"], COMPONENTS.len());
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let service = ComponentService::new(true);
        let result = service.list_components(Some("Forms"), None).await.unwrap();
        assert_eq!(result["mode"], "react-uswds");
        let components = result["components"].as_array().unwrap();
        assert!(!components.is_empty());
        assert!(components.iter().all(|c| c["category"] == "forms"));
    }

    #[tokio::test]
    async fn test_list_unknown_category() {
        let service = ComponentService::new(true);
        let err = service.list_components(Some("widgets"), None).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_component_info_react_override() {
        let service = ComponentService::new(false);
        let info = service
            .get_component_info("button", true, Some(FrameworkMode::React))
            .await
            .unwrap();
        assert_eq!(info["mode"], "react-uswds");
        assert_eq!(info["implementation"]["component"], "Button");
        assert!(info["example"].as_str().unwrap().contains("@trussworks/react-uswds"));
    }

    #[tokio::test]
    async fn test_component_info_tailwind_is_full_content() {
        let service = ComponentService::new(true);
        let info = service
            .get_component_info("alert", false, Some(FrameworkMode::Tailwind))
            .await
            .unwrap();
        assert_eq!(info["mode"], "tailwind-uswds");
        assert_eq!(info["implementation"]["cssClass"], "usa-alert");
        assert!(info.get("example").is_none());
        assert!(info.get("message").is_none());
    }

    #[tokio::test]
    async fn test_component_info_unknown() {
        let service = ComponentService::new(true);
        let err = service.get_component_info("carousel", true, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
