//! Tool Registry - the ordered, validated list of tool descriptors.
//!
//! The registry is the single source of truth for what is callable. The
//! stdio router and the HTTP `tools/list` handler both read from it, and it
//! is validated once at startup: a malformed registry stops the process.

use std::collections::HashSet;
use std::sync::Arc;

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::dispatcher::ToolName;

const MIN_DESCRIPTION_LEN: usize = 10;

/// Configuration errors found while building the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid tool name '{0}': names must match ^[a-z_]+$")]
    InvalidName(String),

    #[error("Tool '{0}' has a description of {1} characters; more than {MIN_DESCRIPTION_LEN} required")]
    DescriptionTooShort(String, usize),

    #[error("Tool '{0}' input schema must have type \"object\"")]
    SchemaNotObject(String),

    #[error("Tool '{0}' input schema properties must be an object")]
    PropertiesNotObject(String),

    #[error("Duplicate tool name '{0}'")]
    Duplicate(String),

    #[error("Tool '{0}' is registered but has no handler")]
    MissingHandler(String),

    #[error("Tool '{0}' has a handler but is not registered")]
    MissingDescriptor(String),
}

/// Name, description and JSON-schema input contract of one tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: JsonObject,
}

impl ToolDescriptor {
    /// Descriptor whose input schema is generated from a params struct.
    pub fn for_params<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            input_schema: schema_for_type::<P>(),
        }
    }

    /// Insert an empty `properties` map when the generated schema has none.
    fn normalized(mut self) -> Self {
        self.input_schema
            .entry("properties")
            .or_insert_with(|| Value::Object(JsonObject::new()));
        self
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let valid_name = !self.name.is_empty()
            && self.name.chars().all(|c| c.is_ascii_lowercase() || c == '_');
        if !valid_name {
            return Err(RegistryError::InvalidName(self.name.to_string()));
        }

        let len = self.description.chars().count();
        if len <= MIN_DESCRIPTION_LEN {
            return Err(RegistryError::DescriptionTooShort(self.name.to_string(), len));
        }

        if self.input_schema.get("type").and_then(Value::as_str) != Some("object") {
            return Err(RegistryError::SchemaNotObject(self.name.to_string()));
        }
        if !self.input_schema.get("properties").is_some_and(Value::is_object) {
            return Err(RegistryError::PropertiesNotObject(self.name.to_string()));
        }
        Ok(())
    }

    /// rmcp model for the stdio transport.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema.clone()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Immutable, validated tool list in registration order.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    descriptors: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Build the registry from every [`ToolName`] and validate it.
    pub fn new() -> Result<Self, RegistryError> {
        let registry = Self::from_descriptors(ToolName::ALL.iter().map(|tool| tool.descriptor()))?;

        for tool in ToolName::ALL {
            if registry.get(tool.as_str()).is_none() {
                return Err(RegistryError::MissingDescriptor(tool.as_str().to_string()));
            }
        }
        Ok(registry)
    }

    /// Validate an arbitrary descriptor list. Every name must also have a handler.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ToolDescriptor>,
    ) -> Result<Self, RegistryError> {
        let descriptors: Vec<ToolDescriptor> =
            descriptors.into_iter().map(ToolDescriptor::normalized).collect();

        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            descriptor.validate()?;
            if !seen.insert(descriptor.name) {
                return Err(RegistryError::Duplicate(descriptor.name.to_string()));
            }
            if descriptor.name.parse::<ToolName>().is_err() {
                return Err(RegistryError::MissingHandler(descriptor.name.to_string()));
            }
        }
        Ok(Self { descriptors })
    }

    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// rmcp tool models for every descriptor.
    pub fn tools(&self) -> Vec<Tool> {
        self.descriptors.iter().map(ToolDescriptor::to_tool).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(name: &'static str, description: &'static str, schema: Value) -> ToolDescriptor {
        let Value::Object(input_schema) = schema else {
            panic!("schema must be an object");
        };
        ToolDescriptor {
            name,
            description,
            input_schema,
        }
    }

    #[test]
    fn test_registry_builds() {
        let registry = ToolRegistry::new().unwrap();
        assert_eq!(registry.len(), 17);
        assert_eq!(registry.names()[0], "list_components");
    }

    #[test]
    fn test_every_schema_is_object_with_properties() {
        let registry = ToolRegistry::new().unwrap();
        for d in registry.descriptors() {
            assert_eq!(d.input_schema["type"], "object", "{}", d.name);
            assert!(d.input_schema["properties"].is_object(), "{}", d.name);
            assert!(d.description.len() > 10, "{}", d.name);
        }
    }

    #[test]
    fn test_schema_generated_from_params() {
        let registry = ToolRegistry::new().unwrap();
        let info = registry.get("get_component_info").unwrap();
        assert!(info.input_schema["properties"]["component"].is_object());
        let required = info.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("component")));
        assert_eq!(info.to_tool().input_schema.as_ref(), &info.input_schema);
    }

    #[test]
    fn test_missing_properties_is_normalized() {
        let registry = ToolRegistry::from_descriptors([descriptor(
            "get_tailwind_uswds_icons",
            "Icon usage docs",
            json!({ "type": "object" }),
        )])
        .unwrap();
        assert_eq!(registry.descriptors()[0].input_schema["properties"], json!({}));
    }

    #[test]
    fn test_invalid_name() {
        let err = ToolRegistry::from_descriptors([descriptor(
            "List-Components",
            "A long enough description",
            json!({ "type": "object", "properties": {} }),
        )])
        .unwrap_err();
        assert_eq!(err, RegistryError::InvalidName("List-Components".to_string()));
    }

    #[test]
    fn test_short_description() {
        let err = ToolRegistry::from_descriptors([descriptor(
            "list_components",
            "Lists",
            json!({ "type": "object", "properties": {} }),
        )])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DescriptionTooShort(_, 5)));
    }

    #[test]
    fn test_non_object_schema() {
        let err = ToolRegistry::from_descriptors([descriptor(
            "list_components",
            "A long enough description",
            json!({ "type": "string" }),
        )])
        .unwrap_err();
        assert!(matches!(err, RegistryError::SchemaNotObject(_)));
    }

    #[test]
    fn test_duplicate_names() {
        let schema = json!({ "type": "object", "properties": {} });
        let err = ToolRegistry::from_descriptors([
            descriptor("list_components", "A long enough description", schema.clone()),
            descriptor("list_components", "Another long description", schema),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("list_components".to_string()));
    }

    #[test]
    fn test_descriptor_without_handler() {
        let err = ToolRegistry::from_descriptors([descriptor(
            "launch_rocket",
            "A long enough description",
            json!({ "type": "object", "properties": {} }),
        )])
        .unwrap_err();
        assert!(matches!(err, RegistryError::MissingHandler(_)));
    }
}
