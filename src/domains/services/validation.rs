//! USWDS markup validation service.
//!
//! Rules are simple text scans over the submitted snippet. They catch the
//! common mistakes (missing labels, wrong attribute dialect, raw palette
//! colors) rather than parsing HTML or JSX.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use super::component::REACT_PACKAGE;
use super::{FrameworkAware, FrameworkMode, ServiceResult, component};
use crate::domains::knowledge::COMPONENTS;
use crate::domains::services::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single finding.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub rule: &'static str,
    pub message: String,
    pub suggestion: String,
}

impl Issue {
    fn new(severity: Severity, rule: &'static str, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity,
            rule,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Tailwind default palette names that bypass USWDS color tokens.
const TAILWIND_PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

#[derive(Debug, Clone)]
pub struct ValidationService {
    use_react_default: bool,
}

impl FrameworkAware for ValidationService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl ValidationService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    /// Validate a snippet against USWDS conventions for the resolved mode.
    pub async fn validate_uswds_code(
        &self,
        code: &str,
        component: Option<&str>,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        if code.trim().is_empty() {
            return Err(ServiceError::invalid_input("Code to validate must not be empty"));
        }
        let mode = self.resolve_mode(framework);

        let mut issues = common_rules(code);
        match mode {
            FrameworkMode::React => issues.extend(react_rules(code)),
            FrameworkMode::Vanilla => issues.extend(markup_rules(code)),
            FrameworkMode::Tailwind => {
                issues.extend(markup_rules(code));
                issues.extend(tailwind_rules(code));
            }
        }
        if let Some(name) = component.filter(|c| !c.trim().is_empty()) {
            issues.extend(expected_component_rule(code, name, mode)?);
        }

        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        let errors = count(Severity::Error);
        let warnings = count(Severity::Warning);
        let info = count(Severity::Info);
        debug!(%mode, errors, warnings, info, "Validated snippet");

        Ok(json!({
            "mode": mode.uswds_label(),
            "valid": errors == 0,
            "issues": issues,
            "summary": {
                "errors": errors,
                "warnings": warnings,
                "info": info,
            },
        }))
    }
}

/// Opening tags with the given name, e.g. every `<img ...>` in the snippet.
fn tags<'a>(code: &'a str, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let open = format!("<{name}");
    code.match_indices(&open)
        .map(|(start, _)| &code[start..])
        .filter(move |rest| {
            rest[name.len() + 1..]
                .chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || c == '>' || c == '/')
        })
        .map(|rest| rest.find('>').map_or(rest, |end| &rest[..=end]))
        .collect::<Vec<_>>()
        .into_iter()
}

fn common_rules(code: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if tags(code, "img").any(|tag| !tag.contains("alt=")) {
        issues.push(Issue::new(
            Severity::Error,
            "img-alt",
            "Image without alt attribute",
            "Add alt text, or alt=\"\" for decorative images",
        ));
    }

    let has_input = tags(code, "input").any(|tag| !tag.contains("type=\"hidden\""))
        || tags(code, "TextInput").next().is_some();
    let has_label = code.contains("<label") || code.contains("<Label") || code.contains("aria-label");
    if has_input && !has_label {
        issues.push(Issue::new(
            Severity::Error,
            "input-label",
            "Form input without an associated label",
            "Add a label element linked with for/id (htmlFor in React)",
        ));
    }

    if tags(code, "button").any(|tag| !tag.contains("type=")) {
        issues.push(Issue::new(
            Severity::Warning,
            "button-type",
            "Button without an explicit type",
            "Set type=\"button\" or type=\"submit\"",
        ));
    }

    if code.contains("style=") {
        issues.push(Issue::new(
            Severity::Warning,
            "inline-style",
            "Inline styles bypass the design system",
            "Use USWDS utility classes or design tokens",
        ));
    }

    if contains_hex_color(code) {
        issues.push(Issue::new(
            Severity::Warning,
            "hardcoded-color",
            "Hard-coded hex color",
            "Use a USWDS color token such as primary or base-dark",
        ));
    }

    issues
}

fn react_rules(code: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if code.contains(" class=\"") {
        issues.push(Issue::new(
            Severity::Error,
            "jsx-class-attribute",
            "JSX uses class instead of className",
            "Rename class= to className=",
        ));
    }

    let used: Vec<&str> = COMPONENTS
        .iter()
        .map(|c| c.react_component)
        .filter(|name| tags(code, name).next().is_some())
        .collect();
    if !used.is_empty() && !code.contains(REACT_PACKAGE) {
        issues.push(Issue::new(
            Severity::Error,
            "react-import",
            format!("Components used without importing from {REACT_PACKAGE}: {}", used.join(", ")),
            format!("import {{ {} }} from '{REACT_PACKAGE}';", used.join(", ")),
        ));
    }

    for doc in COMPONENTS {
        let raw = format!("className=\"{}", doc.css_class);
        if code.contains(&raw) {
            issues.push(Issue::new(
                Severity::Info,
                "prefer-react-component",
                format!("Raw {} markup found", doc.css_class),
                format!("Use the <{}> component from {REACT_PACKAGE}", doc.react_component),
            ));
        }
    }

    issues
}

fn markup_rules(code: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if code.contains("className=") {
        issues.push(Issue::new(
            Severity::Error,
            "html-classname",
            "HTML markup uses className",
            "Use class= in plain HTML",
        ));
    }

    let checks: [(&str, &str, &'static str); 4] = [
        ("button", "usa-button", "button-class"),
        ("select", "usa-select", "select-class"),
        ("table", "usa-table", "table-class"),
        ("textarea", "usa-textarea", "textarea-class"),
    ];
    for (tag, class, rule) in checks {
        if tags(code, tag).any(|t| !t.contains(class)) {
            issues.push(Issue::new(
                Severity::Warning,
                rule,
                format!("<{tag}> without the {class} class"),
                format!("Add class=\"{class}\""),
            ));
        }
    }

    let input_classes = ["usa-input", "usa-checkbox__input", "usa-radio__input", "usa-file-input"];
    if tags(code, "input")
        .filter(|t| !t.contains("type=\"hidden\""))
        .any(|t| !input_classes.iter().any(|c| t.contains(c)))
    {
        issues.push(Issue::new(
            Severity::Warning,
            "input-class",
            "<input> without a USWDS input class",
            "Add usa-input (or usa-checkbox__input / usa-radio__input)",
        ));
    }

    issues
}

fn tailwind_rules(code: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let classes: Vec<&str> = code
        .split(|c: char| c.is_whitespace() || c == '"' || c == '\'')
        .filter(|s| !s.is_empty())
        .collect();

    if classes.iter().any(|c| c.contains("-[")) {
        issues.push(Issue::new(
            Severity::Warning,
            "tailwind-arbitrary-value",
            "Arbitrary Tailwind values bypass USWDS tokens",
            "Use token-named utilities such as padding-2 or bg-primary",
        ));
    }

    let palette: Vec<&str> = classes.iter().copied().filter(|c| is_default_palette(c)).collect();
    if !palette.is_empty() {
        issues.push(Issue::new(
            Severity::Warning,
            "tailwind-default-palette",
            format!("Default Tailwind palette classes: {}", palette.join(", ")),
            "Use USWDS color tokens, e.g. bg-primary or text-base-dark",
        ));
    }

    issues
}

fn expected_component_rule(code: &str, name: &str, mode: FrameworkMode) -> ServiceResult<Vec<Issue>> {
    let doc = component::lookup(name)?;
    let present = match mode {
        FrameworkMode::React => tags(code, doc.react_component).next().is_some() || code.contains(doc.css_class),
        FrameworkMode::Vanilla | FrameworkMode::Tailwind => code.contains(doc.css_class),
    };
    if present {
        return Ok(Vec::new());
    }
    let expected = match mode {
        FrameworkMode::React => format!("<{}>", doc.react_component),
        FrameworkMode::Vanilla | FrameworkMode::Tailwind => doc.css_class.to_string(),
    };
    Ok(vec![Issue::new(
        Severity::Error,
        "expected-component",
        format!("Expected {} usage but none was found", doc.name),
        format!("Use {expected}"),
    )])
}

/// `bg-blue-500`, `text-red-600`, `border-gray-200` and similar.
fn is_default_palette(class: &str) -> bool {
    let class = class.rsplit(':').next().unwrap_or(class);
    let mut parts = class.split('-');
    let (Some(prefix), Some(color), Some(shade), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    matches!(prefix, "bg" | "text" | "border" | "ring" | "fill")
        && TAILWIND_PALETTE.contains(&color)
        && shade.len() >= 2
        && shade.chars().all(|c| c.is_ascii_digit())
}

fn contains_hex_color(code: &str) -> bool {
    code.match_indices('#').any(|(i, _)| {
        let digits: String = code[i + 1..].chars().take_while(|c| c.is_ascii_hexdigit()).collect();
        let boundary = code[i + 1 + digits.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric() && c != '-' && c != '_');
        (digits.len() == 3 || digits.len() == 6) && boundary && digits.chars().any(|c| c.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(result: &Value) -> Vec<String> {
        result["issues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["rule"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_valid_vanilla_button() {
        let service = ValidationService::new(false);
        let result = service
            .validate_uswds_code(r#"<button type="button" class="usa-button">Go</button>"#, None, None)
            .await
            .unwrap();
        assert_eq!(result["mode"], "vanilla-uswds");
        assert_eq!(result["valid"], true);
        assert!(rules(&result).is_empty());
    }

    #[tokio::test]
    async fn test_vanilla_missing_classes_and_label() {
        let service = ValidationService::new(false);
        let result = service
            .validate_uswds_code(r#"<input id="x" type="text"><button>Go</button>"#, None, None)
            .await
            .unwrap();
        let rules = rules(&result);
        assert_eq!(result["valid"], false);
        assert!(rules.contains(&"input-label".to_string()));
        assert!(rules.contains(&"input-class".to_string()));
        assert!(rules.contains(&"button-class".to_string()));
        assert!(rules.contains(&"button-type".to_string()));
    }

    #[tokio::test]
    async fn test_react_missing_import() {
        let service = ValidationService::new(true);
        let result = service
            .validate_uswds_code(r#"<Button type="button">Go</Button>"#, None, None)
            .await
            .unwrap();
        assert_eq!(result["mode"], "react-uswds");
        assert!(rules(&result).contains(&"react-import".to_string()));
    }

    #[tokio::test]
    async fn test_react_override_with_vanilla_default() {
        let service = ValidationService::new(false);
        let code = "import { Button } from '@trussworks/react-uswds';\n<Button type=\"button\">Go</Button>";
        let result = service
            .validate_uswds_code(code, Some("button"), Some(FrameworkMode::React))
            .await
            .unwrap();
        assert_eq!(result["mode"], "react-uswds");
        assert_eq!(result["valid"], true);
    }

    #[tokio::test]
    async fn test_tailwind_palette_and_arbitrary_values() {
        let service = ValidationService::new(false);
        let code = r#"<button type="button" class="usa-button bg-blue-500 p-[13px]">Go</button>"#;
        let result = service
            .validate_uswds_code(code, None, Some(FrameworkMode::Tailwind))
            .await
            .unwrap();
        let rules = rules(&result);
        assert!(rules.contains(&"tailwind-default-palette".to_string()));
        assert!(rules.contains(&"tailwind-arbitrary-value".to_string()));
    }

    #[tokio::test]
    async fn test_expected_component_missing() {
        let service = ValidationService::new(false);
        let result = service
            .validate_uswds_code(r#"<div class="usa-card">x</div>"#, Some("alert"), None)
            .await
            .unwrap();
        assert!(rules(&result).contains(&"expected-component".to_string()));
    }

    #[tokio::test]
    async fn test_empty_code_rejected() {
        let service = ValidationService::new(false);
        assert!(service.validate_uswds_code("   ", None, None).await.is_err());
    }

    #[test]
    fn test_hex_detection() {
        assert!(contains_hex_color("color: #005ea2;"));
        assert!(!contains_hex_color("fill=\"#fff0\""));
        assert!(!contains_hex_color(r##"<a href="#main-content">"##));
    }

    #[test]
    fn test_palette_detection() {
        assert!(is_default_palette("bg-blue-500"));
        assert!(is_default_palette("hover:text-red-600"));
        assert!(!is_default_palette("bg-primary-dark"));
        assert!(!is_default_palette("usa-button"));
    }
}
