//! Component suggestion service.

use serde_json::{Value, json};

use super::component::REACT_PACKAGE;
use super::{FrameworkAware, FrameworkMode, ServiceError, ServiceResult};
use crate::domains::knowledge::{ComponentDoc, find_component};

/// Words in a description mapped to the component they call for.
static INTENTS: &[(&[&str], &str, &str)] = &[
    (&["form", "input", "field", "enter", "type", "name", "email", "address"], "text-input", "Collect free-text input"),
    (&["choose", "select", "dropdown", "pick", "option", "state"], "select", "Pick one value from a long list"),
    (&["one of", "radio", "single choice", "yes or no"], "radio", "Pick one value from a short list"),
    (&["multiple", "checkbox", "agree", "terms", "consent"], "checkbox", "Select any number of options"),
    (&["date", "birthday", "calendar", "deadline", "appointment"], "date-picker", "Enter a calendar date"),
    (&["submit", "button", "action", "save", "continue", "cancel"], "button", "Trigger an action"),
    (&["error", "warning", "success", "notify", "notification", "message", "status"], "alert", "Communicate status to the user"),
    (&["confirm", "dialog", "popup", "modal", "overlay"], "modal", "Focus attention on a required decision"),
    (&["faq", "expand", "collapse", "accordion", "questions"], "accordion", "Progressively disclose content"),
    (&["step", "wizard", "progress", "multi-step", "stages"], "step-indicator", "Show progress through a process"),
    (&["list of", "results", "table", "data", "rows", "records"], "table", "Display tabular data"),
    (&["page", "pages", "paging", "pagination", "next"], "pagination", "Navigate across pages of results"),
    (&["search", "find", "lookup", "query"], "search", "Search the site or a collection"),
    (&["card", "tile", "summary", "preview", "featured"], "card", "Group related content into scannable blocks"),
    (&["navigation", "menu", "nav", "header", "logo"], "header", "Site identity and primary navigation"),
    (&["footer", "contact", "links"], "footer", "Secondary navigation and agency info"),
    (&["breadcrumb", "hierarchy", "trail", "where am i"], "breadcrumb", "Show the page's place in the site"),
    (&["official", "government", ".gov", "banner"], "banner", "Identify an official government site"),
    (&["tag", "label", "category", "badge"], "tag", "Label content with a short category"),
];

/// Suggests components for a UI description. Content is React only.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    use_react_default: bool,
}

impl FrameworkAware for SuggestionService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl SuggestionService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    pub async fn suggest_components(
        &self,
        description: &str,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        match mode {
            FrameworkMode::Vanilla => {
                return Ok(json!({
                    "mode": mode.uswds_label(),
                    "message": "Component suggestions are only available in React mode. \
                                Use list_components or get_component_info for vanilla USWDS markup.",
                }));
            }
            FrameworkMode::Tailwind => {
                return Ok(json!({
                    "mode": mode.uswds_label(),
                    "message": "Component suggestions are not available for Tailwind-USWDS. \
                                They are only available in React mode; see get_tailwind_uswds_component.",
                }));
            }
            FrameworkMode::React => {}
        }

        let words = tokenize(description);
        if words.is_empty() {
            return Err(ServiceError::invalid_input("Description must not be empty"));
        }

        let mut suggestions: Vec<Value> = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        for (keywords, id, reason) in INTENTS {
            let hits: Vec<&str> = keywords
                .iter()
                .copied()
                .filter(|k| contains_phrase(&words, &tokenize(k)))
                .collect();
            if hits.is_empty() || seen.contains(id) {
                continue;
            }
            if let Some(doc) = find_component(id) {
                seen.push(*id);
                suggestions.push(suggestion(doc, reason, &hits));
            }
        }

        let message = if suggestions.is_empty() {
            "No specific components matched. Start from button, text-input and alert, or describe the UI in more detail."
        } else {
            "Components ranked in catalog order of the intents they match."
        };

        Ok(json!({
            "mode": mode.uswds_label(),
            "description": description,
            "total": suggestions.len(),
            "suggestions": suggestions,
            "message": message,
        }))
    }
}

/// Lowercased alphanumeric words.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whether `phrase` occurs as consecutive whole words of `words`.
fn contains_phrase(words: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && words.windows(phrase.len()).any(|window| window == phrase)
}

fn suggestion(doc: &ComponentDoc, reason: &str, hits: &[&str]) -> Value {
    json!({
        "id": doc.id,
        "component": doc.react_component,
        "reason": reason,
        "matchedKeywords": hits,
        "import": format!("import {{ {} }} from '{}';", doc.react_component, REACT_PACKAGE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_react_suggestions() {
        let service = SuggestionService::new(true);
        let result = service
            .suggest_components("A contact form with email field and a submit button", None)
            .await
            .unwrap();
        assert_eq!(result["mode"], "react-uswds");
        let ids: Vec<&str> = result["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"text-input"));
        assert!(ids.contains(&"button"));
    }

    #[tokio::test]
    async fn test_vanilla_is_degraded() {
        let service = SuggestionService::new(true);
        let result = service
            .suggest_components("login form", Some(FrameworkMode::Vanilla))
            .await
            .unwrap();
        assert_eq!(result["mode"], "vanilla-uswds");
        assert!(result["message"].as_str().unwrap().contains("only available in React mode"));
        assert!(result.get("suggestions").is_none());
    }

    #[tokio::test]
    async fn test_default_false_with_react_override() {
        let service = SuggestionService::new(false);
        let result = service
            .suggest_components("schedule an appointment", Some(FrameworkMode::React))
            .await
            .unwrap();
        assert_eq!(result["mode"], "react-uswds");
        assert_eq!(result["total"], 1);
        assert_eq!(result["suggestions"][0]["component"], "DatePicker");
    }

    #[tokio::test]
    async fn test_keywords_match_whole_words() {
        let service = SuggestionService::new(true);
        let result = service
            .suggest_components("a prototype showing the username and bank statement", None)
            .await
            .unwrap();
        assert_eq!(result["total"], 0, "{result}");
    }

    #[tokio::test]
    async fn test_multi_word_keywords() {
        let service = SuggestionService::new(true);
        let result = service
            .suggest_components("Ask a yes-or-no question", None)
            .await
            .unwrap();
        assert_eq!(result["suggestions"][0]["id"], "radio");
        assert_eq!(result["suggestions"][0]["matchedKeywords"][0], "yes or no");
    }
}
