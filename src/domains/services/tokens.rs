//! Design token service.

use serde_json::{Value, json};

use super::{FrameworkAware, FrameworkMode, ServiceResult};
use crate::domains::knowledge::{TOKEN_CATEGORIES, TokenCategory, normalize_key};

/// Serves USWDS design tokens with usage snippets per framework mode.
#[derive(Debug, Clone)]
pub struct TokenService {
    use_react_default: bool,
}

impl FrameworkAware for TokenService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl TokenService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    /// Tokens for one category, or every category when none is given.
    ///
    /// An unknown category is reported inside a successful payload with the
    /// list of valid categories.
    pub async fn get_design_tokens(
        &self,
        category: Option<&str>,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        let requested = category.map(normalize_key).filter(|c| !c.is_empty() && c != "all");

        let Some(requested) = requested else {
            let categories: Vec<Value> = TOKEN_CATEGORIES
                .iter()
                .map(|c| render_category(c, mode))
                .collect();
            return Ok(json!({
                "mode": mode.uswds_label(),
                "categories": categories,
            }));
        };

        match TOKEN_CATEGORIES.iter().find(|c| c.id == requested) {
            Some(found) => {
                let mut payload = render_category(found, mode);
                if let Some(obj) = payload.as_object_mut() {
                    obj.insert("mode".to_string(), json!(mode.uswds_label()));
                }
                Ok(payload)
            }
            None => Ok(json!({
                "error": format!("Token category '{}' not found", category.unwrap_or_default()),
                "availableCategories": TOKEN_CATEGORIES.iter().map(|c| c.id).collect::<Vec<_>>(),
            })),
        }
    }
}

fn render_category(category: &TokenCategory, mode: FrameworkMode) -> Value {
    let tokens: Vec<Value> = category
        .tokens
        .iter()
        .map(|t| {
            let usage = match mode {
                FrameworkMode::React | FrameworkMode::Vanilla => t.scss,
                FrameworkMode::Tailwind => t.tailwind,
            };
            json!({
                "token": t.token,
                "value": t.value,
                "description": t.description,
                "usage": usage,
            })
        })
        .collect();

    json!({
        "category": category.id,
        "description": category.description,
        "tokens": tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_categories() {
        let service = TokenService::new(false);
        let result = service.get_design_tokens(None, None).await.unwrap();
        assert_eq!(result["categories"].as_array().unwrap().len(), TOKEN_CATEGORIES.len());
    }

    #[tokio::test]
    async fn test_single_category_tailwind_usage() {
        let service = TokenService::new(false);
        let result = service
            .get_design_tokens(Some("color"), Some(FrameworkMode::Tailwind))
            .await
            .unwrap();
        assert_eq!(result["mode"], "tailwind-uswds");
        assert_eq!(result["category"], "color");
        let first = &result["tokens"][0];
        assert!(first["usage"].as_str().unwrap().starts_with("text-"));
    }

    #[tokio::test]
    async fn test_unknown_category_is_soft_error() {
        let service = TokenService::new(true);
        let result = service.get_design_tokens(Some("invalid"), None).await.unwrap();
        assert!(result["error"].as_str().unwrap().contains("not found"));
        assert!(result["availableCategories"].as_array().unwrap().len() > 1);
    }
}
