//! Component code generation.

use serde_json::{Map, Value, json};

use super::component::{REACT_PACKAGE, example, lookup};
use super::{FrameworkAware, FrameworkMode, ServiceError, ServiceResult};
use crate::domains::knowledge::ComponentDoc;

/// Props understood by the templates, with their defaults.
#[derive(Debug, Clone)]
struct Props {
    id: String,
    label: String,
    variant: Option<String>,
    heading: String,
    text: String,
    options: Vec<String>,
}

impl Props {
    fn from_map(doc: &ComponentDoc, props: Option<&Map<String, Value>>) -> ServiceResult<Self> {
        let empty = Map::new();
        let props = props.unwrap_or(&empty);
        let string = |key: &str| -> ServiceResult<Option<String>> {
            match props.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(Value::Number(n)) => Ok(Some(n.to_string())),
                Some(Value::Bool(b)) => Ok(Some(b.to_string())),
                Some(other) => Err(ServiceError::invalid_input(format!(
                    "Prop '{key}' must be a string, got {other}"
                ))),
            }
        };

        let options = match props.get("options") {
            None | Some(Value::Null) => vec!["Option A".to_string(), "Option B".to_string()],
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect(),
            Some(other) => {
                return Err(ServiceError::invalid_input(format!(
                    "Prop 'options' must be an array, got {other}"
                )));
            }
        };

        let variant = string("variant")?;
        if let Some(ref v) = variant {
            if !doc.variants.contains(&v.as_str()) {
                return Err(ServiceError::invalid_input(format!(
                    "Unknown variant '{v}' for {}. Valid variants: {}",
                    doc.id,
                    doc.variants.join(", ")
                )));
            }
        }

        Ok(Self {
            id: string("id")?.unwrap_or_else(|| format!("{}-1", doc.id)),
            label: string("label")?.unwrap_or_else(|| doc.name.to_string()),
            variant: variant.filter(|v| v != "default"),
            heading: string("heading")?.unwrap_or_else(|| doc.name.to_string()),
            text: string("text")?.unwrap_or_else(|| "Content goes here.".to_string()),
            options,
        })
    }
}

/// Generates ready-to-paste component code for a framework mode.
#[derive(Debug, Clone)]
pub struct CodeGenerationService {
    use_react_default: bool,
}

impl FrameworkAware for CodeGenerationService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

impl CodeGenerationService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    pub async fn generate_component_code(
        &self,
        component: &str,
        props: Option<&Map<String, Value>>,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        let doc = lookup(component)?;
        let props = Props::from_map(doc, props)?;

        let (code, templated) = match render(doc, &props, mode) {
            Some(code) => (code, true),
            None => (example(doc, mode).to_string(), false),
        };

        let mut payload = json!({
            "mode": mode.uswds_label(),
            "component": doc.id,
            "code": code,
            "templated": templated,
            "accessibility": doc.accessibility,
        });
        if mode == FrameworkMode::React {
            if let Some(obj) = payload.as_object_mut() {
                obj.insert(
                    "dependencies".to_string(),
                    json!([REACT_PACKAGE, "@uswds/uswds"]),
                );
            }
        }
        Ok(payload)
    }
}

fn modifier(doc: &ComponentDoc, props: &Props) -> String {
    props
        .variant
        .as_ref()
        .map(|v| format!(" {}--{}", doc.css_class, v))
        .unwrap_or_default()
}

/// Templated code for the components that take the common props.
fn render(doc: &ComponentDoc, props: &Props, mode: FrameworkMode) -> Option<String> {
    let Props { id, label, heading, text, options, .. } = props;
    let modifier = modifier(doc, props);
    let tw = mode == FrameworkMode::Tailwind;

    let code = match (doc.id, mode) {
        ("button", FrameworkMode::React) => {
            let variant = match props.variant.as_deref() {
                Some(accent @ ("accent-cool" | "accent-warm")) => {
                    format!(" accentStyle=\"{}\"", accent.trim_start_matches("accent-"))
                }
                Some(v) => format!(" {v}"),
                None => String::new(),
            };
            format!("import {{ Button }} from '{REACT_PACKAGE}';\n\n<Button type=\"button\"{variant}>{label}</Button>")
        }
        ("button", _) => {
            let extra = if tw { " mt-2" } else { "" };
            format!("<button type=\"button\" class=\"usa-button{modifier}{extra}\">{label}</button>")
        }

        ("alert", FrameworkMode::React) => {
            let kind = props.variant.as_deref().unwrap_or("info");
            format!(
                "import {{ Alert }} from '{REACT_PACKAGE}';\n\n<Alert type=\"{kind}\" headingLevel=\"h4\" heading=\"{heading}\">\n  {text}\n</Alert>"
            )
        }
        ("alert", _) => {
            let kind = props.variant.as_deref().unwrap_or("info");
            let extra = if tw { " margin-y-2" } else { "" };
            format!(
                "<div class=\"usa-alert usa-alert--{kind}{extra}\">\n  <div class=\"usa-alert__body\">\n    <h4 class=\"usa-alert__heading\">{heading}</h4>\n    <p class=\"usa-alert__text\">{text}</p>\n  </div>\n</div>"
            )
        }

        ("text-input", FrameworkMode::React) => format!(
            "import {{ Label, TextInput }} from '{REACT_PACKAGE}';\n\n<Label htmlFor=\"{id}\">{label}</Label>\n<TextInput id=\"{id}\" name=\"{id}\" type=\"text\" />"
        ),
        ("text-input", _) => {
            let extra = if tw { " maxw-mobile-lg" } else { "" };
            format!(
                "<label class=\"usa-label\" for=\"{id}\">{label}</label>\n<input class=\"usa-input{modifier}{extra}\" id=\"{id}\" name=\"{id}\" type=\"text\" />"
            )
        }

        ("checkbox", FrameworkMode::React) => format!(
            "import {{ Checkbox }} from '{REACT_PACKAGE}';\n\n<Checkbox id=\"{id}\" name=\"{id}\" label=\"{label}\" />"
        ),
        ("checkbox", _) => format!(
            "<div class=\"usa-checkbox\">\n  <input class=\"usa-checkbox__input{tile}\" id=\"{id}\" type=\"checkbox\" name=\"{id}\" />\n  <label class=\"usa-checkbox__label\" for=\"{id}\">{label}</label>\n</div>",
            tile = if props.variant.as_deref() == Some("tile") { " usa-checkbox__input--tile" } else { "" },
        ),

        ("select", FrameworkMode::React) => {
            let opts: String = options
                .iter()
                .map(|o| format!("\n  <option value=\"{}\">{o}</option>", slug(o)))
                .collect();
            format!(
                "import {{ Label, Select }} from '{REACT_PACKAGE}';\n\n<Label htmlFor=\"{id}\">{label}</Label>\n<Select id=\"{id}\" name=\"{id}\">\n  <option>- Select -</option>{opts}\n</Select>"
            )
        }
        ("select", _) => {
            let opts: String = options
                .iter()
                .map(|o| format!("\n  <option value=\"{}\">{o}</option>", slug(o)))
                .collect();
            format!(
                "<label class=\"usa-label\" for=\"{id}\">{label}</label>\n<select class=\"usa-select\" id=\"{id}\" name=\"{id}\">\n  <option>- Select -</option>{opts}\n</select>"
            )
        }

        ("tag", FrameworkMode::React) => {
            let big = if props.variant.as_deref() == Some("big") { " big" } else { "" };
            format!("import {{ Tag }} from '{REACT_PACKAGE}';\n\n<Tag{big}>{label}</Tag>")
        }
        ("tag", _) => format!("<span class=\"usa-tag{modifier}\">{label}</span>"),

        ("card", FrameworkMode::React) => format!(
            "import {{ Card, CardHeader, CardBody, CardFooter, Button }} from '{REACT_PACKAGE}';\n\n<Card headerFirst>\n  <CardHeader>\n    <h2 className=\"usa-card__heading\">{heading}</h2>\n  </CardHeader>\n  <CardBody>\n    <p>{text}</p>\n  </CardBody>\n  <CardFooter>\n    <Button type=\"button\">{label}</Button>\n  </CardFooter>\n</Card>"
        ),
        ("card", _) => format!(
            "<div class=\"usa-card{modifier}\">\n  <div class=\"usa-card__container\">\n    <div class=\"usa-card__header\">\n      <h2 class=\"usa-card__heading\">{heading}</h2>\n    </div>\n    <div class=\"usa-card__body\">\n      <p>{text}</p>\n    </div>\n    <div class=\"usa-card__footer\">\n      <button type=\"button\" class=\"usa-button\">{label}</button>\n    </div>\n  </div>\n</div>"
        ),

        _ => return None,
    };
    Some(code)
}

fn slug(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("props must be an object"),
        }
    }

    #[tokio::test]
    async fn test_react_button_with_props() {
        let service = CodeGenerationService::new(true);
        let map = props(json!({ "label": "Submit", "variant": "secondary" }));
        let result = service
            .generate_component_code("button", Some(&map), None)
            .await
            .unwrap();
        assert_eq!(result["mode"], "react-uswds");
        let code = result["code"].as_str().unwrap();
        assert!(code.contains("<Button type=\"button\" secondary>Submit</Button>"));
        assert_eq!(result["templated"], true);
    }

    #[tokio::test]
    async fn test_vanilla_text_input() {
        let service = CodeGenerationService::new(false);
        let map = props(json!({ "id": "email", "label": "Email address" }));
        let result = service
            .generate_component_code("text-input", Some(&map), None)
            .await
            .unwrap();
        assert_eq!(result["mode"], "vanilla-uswds");
        let code = result["code"].as_str().unwrap();
        assert!(code.contains("for=\"email\""));
        assert!(code.contains("class=\"usa-input\""));
        assert!(result.get("dependencies").is_none());
    }

    #[tokio::test]
    async fn test_untemplated_component_falls_back_to_example() {
        let service = CodeGenerationService::new(false);
        let result = service
            .generate_component_code("accordion", None, Some(FrameworkMode::Tailwind))
            .await
            .unwrap();
        assert_eq!(result["mode"], "tailwind-uswds");
        assert_eq!(result["templated"], false);
        assert!(!result["code"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_variant() {
        let service = CodeGenerationService::new(true);
        let map = props(json!({ "variant": "sparkly" }));
        let err = service
            .generate_component_code("button", Some(&map), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("sparkly"));
    }

    #[tokio::test]
    async fn test_unknown_component() {
        let service = CodeGenerationService::new(true);
        let err = service.generate_component_code("carousel", None, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
