//! End-to-end contract of the tool dispatch path.

use std::sync::Arc;

use serde_json::{Value, json};
use uswds_mcp_server::domains::services::ServiceBag;
use uswds_mcp_server::domains::tools::{Dispatcher, ToolName, ToolRegistry, dispatch};

/// Smallest valid arguments for each tool.
fn minimal_args(tool: ToolName) -> Value {
    match tool {
        ToolName::GetComponentInfo => json!({ "component": "button" }),
        ToolName::ValidateUswdsCode => json!({ "code": "<button class=\"usa-button\">Save</button>" }),
        ToolName::CheckColorContrast => json!({ "foreground": "#000000", "background": "#ffffff" }),
        ToolName::SuggestLayout => json!({ "description": "a simple contact form" }),
        ToolName::SuggestComponents => json!({ "description": "collect an email address" }),
        ToolName::CompareComponents => json!({ "component_a": "checkbox", "component_b": "radio" }),
        ToolName::GenerateComponentCode => json!({ "component": "alert" }),
        ToolName::SearchTailwindDocs => json!({ "query": "button" }),
        _ => json!({}),
    }
}

fn payload(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("not JSON ({e}): {text}"))
}

#[tokio::test]
async fn every_registered_tool_succeeds_with_minimal_args() {
    let registry = ToolRegistry::new().unwrap();
    assert_eq!(registry.len(), ToolName::ALL.len());

    for services in [ServiceBag::new(false), ServiceBag::new(true)] {
        for name in registry.names() {
            let tool: ToolName = name.parse().unwrap();
            let result = dispatch(name, minimal_args(tool), &services).await;

            let wire = serde_json::to_value(&result).unwrap();
            assert_eq!(wire["content"][0]["type"], "text", "{name}");
            assert!(!result.is_error(), "{name}: {}", result.text());
            assert!(!result.text().is_empty(), "{name}");
        }
    }
}

#[tokio::test]
async fn unknown_tool_is_an_error_envelope() {
    let result = dispatch("nonexistent_tool", json!({}), &ServiceBag::new(false)).await;
    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["isError"], true);
    assert!(result.text().starts_with("Error: "));
    assert!(result.text().contains("nonexistent_tool"));
}

#[tokio::test]
async fn framework_override_wins_over_default() {
    let react_default = ServiceBag::new(true);
    let vanilla_default = ServiceBag::new(false);

    let cases = [
        (&react_default, None, "react-uswds"),
        (&react_default, Some("vanilla"), "vanilla-uswds"),
        (&react_default, Some("tailwind"), "tailwind-uswds"),
        (&vanilla_default, None, "vanilla-uswds"),
        (&vanilla_default, Some("react"), "react-uswds"),
    ];
    for (services, framework, expected) in cases {
        let args = match framework {
            Some(framework) => json!({ "component": "alert", "framework": framework }),
            None => json!({ "component": "alert" }),
        };
        for tool in ["get_component_info", "generate_component_code"] {
            let result = dispatch(tool, args.clone(), services).await;
            assert!(!result.is_error(), "{tool}: {}", result.text());
            assert_eq!(payload(result.text())["mode"], expected, "{tool} {framework:?}");
        }
    }
}

#[tokio::test]
async fn unknown_token_category_is_a_soft_error() {
    let result = dispatch("get_design_tokens", json!({ "category": "invalid" }), &ServiceBag::new(false)).await;
    assert!(!result.is_error());
    let body = payload(result.text());
    assert!(body["error"].as_str().unwrap().contains("not found"));
    assert!(body["availableCategories"].as_array().unwrap().len() > 1);
}

#[tokio::test]
async fn vanilla_comparison_is_degraded() {
    let result = dispatch(
        "compare_components",
        json!({ "component_a": "checkbox", "component_b": "radio", "framework": "vanilla" }),
        &ServiceBag::new(true),
    )
    .await;
    assert!(!result.is_error());
    let body = payload(result.text());
    assert_eq!(body["mode"], "vanilla-uswds");
    assert!(body["message"].as_str().unwrap().contains("only available in React mode"));
}

#[tokio::test]
async fn identical_calls_give_identical_envelopes() {
    let dispatcher = Dispatcher::new(Arc::new(ServiceBag::new(false)));
    for tool in ToolName::ALL {
        let args = minimal_args(tool);
        let first = dispatcher.dispatch_tool(tool, args.clone()).await;
        let second = dispatcher.dispatch_tool(tool, args).await;
        assert_eq!(first, second, "{tool}");
    }
}

#[tokio::test]
async fn missing_component_lists_alternatives() {
    let result = dispatch("get_component_info", json!({ "component": "carousel" }), &ServiceBag::new(false)).await;
    assert!(result.is_error());
    assert!(result.text().starts_with("Error: "));
    assert!(result.text().contains("carousel"));
}
