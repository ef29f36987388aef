//! The tool result envelope shared by every transport.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ToolError;

/// One text block of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// `{ content: [{type: "text", text}], isError? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<TextBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResult {
    /// Wrap a service payload. Strings are used verbatim, anything else is
    /// pretty-printed JSON.
    pub fn success(payload: Value) -> Result<Self, ToolError> {
        let text = match payload {
            Value::String(text) => text,
            other => serde_json::to_string_pretty(&other)?,
        };
        Ok(Self {
            content: vec![TextBlock::new(text)],
            is_error: None,
        })
    }

    /// Wrap a failure as `"Error: <message>"`.
    pub fn error(err: &ToolError) -> Self {
        Self {
            content: vec![TextBlock::new(format!("Error: {err}"))],
            is_error: Some(true),
        }
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Text of the first content block.
    pub fn text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or_default()
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        let is_error = result.is_error();
        let content = result
            .content
            .into_iter()
            .map(|block| Content::text(block.text))
            .collect();
        if is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_pretty_prints_objects() {
        let result = ToolResult::success(json!({ "a": 1 })).unwrap();
        assert_eq!(result.text(), "{\n  \"a\": 1\n}");
        assert!(!result.is_error());
    }

    #[test]
    fn test_success_string_is_verbatim() {
        let result = ToolResult::success(json!("# Title")).unwrap();
        assert_eq!(result.text(), "# Title");
    }

    #[test]
    fn test_error_envelope_shape() {
        let result = ToolResult::error(&ToolError::unknown_tool("nope"));
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(
            wire,
            json!({
                "content": [{ "type": "text", "text": "Error: Unknown tool: nope" }],
                "isError": true,
            })
        );
    }

    #[test]
    fn test_success_omits_is_error() {
        let wire = serde_json::to_value(ToolResult::success(json!({})).unwrap()).unwrap();
        assert!(wire.get("isError").is_none());
    }

    #[test]
    fn test_into_call_tool_result() {
        let call: CallToolResult = ToolResult::error(&ToolError::unknown_tool("x")).into();
        assert_eq!(call.is_error, Some(true));
    }
}
