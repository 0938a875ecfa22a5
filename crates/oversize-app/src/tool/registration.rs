//! Static metadata advertised to the host when the tool is registered

use oversize_types::PackageField;
use serde::{Deserialize, Serialize};

pub const TOOL_NAME: &str = "check_package_oversized";
pub const TOOL_DESCRIPTION: &str = "Check if a package is oversized based on dimensions and weight.";

/// One declared tool parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolProperty {
    pub property_name: String,
    pub property_type: String,
    pub description: String,
}

impl ToolProperty {
    fn number(field: PackageField) -> Self {
        Self {
            property_name: field.key().to_string(),
            property_type: "number".to_string(),
            description: format!(
                "The {} of the package in {}.",
                field.key(),
                field.unit()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub tool_name: String,
    pub description: String,
    pub tool_properties: Vec<ToolProperty>,
}

impl ToolDefinition {
    /// The `toolProperties` array as the JSON string hosts expect.
    pub fn properties_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tool_properties)
    }
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        tool_name: TOOL_NAME.to_string(),
        description: TOOL_DESCRIPTION.to_string(),
        tool_properties: PackageField::ALL
            .iter()
            .map(|field| ToolProperty::number(*field))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_number_properties() {
        let def = tool_definition();
        assert_eq!(def.tool_name, "check_package_oversized");
        let names: Vec<_> = def
            .tool_properties
            .iter()
            .map(|p| p.property_name.as_str())
            .collect();
        assert_eq!(names, vec!["length", "width", "height", "weight"]);
        assert!(def.tool_properties.iter().all(|p| p.property_type == "number"));
    }

    #[test]
    fn test_descriptions() {
        let def = tool_definition();
        assert_eq!(
            def.tool_properties[0].description,
            "The length of the package in inches."
        );
        assert_eq!(
            def.tool_properties[3].description,
            "The weight of the package in grams."
        );
    }

    #[test]
    fn test_properties_json_keys() {
        let json = tool_definition().properties_json().unwrap();
        assert!(json.starts_with(r#"[{"propertyName":"length","propertyType":"number","description":"#));
    }
}
