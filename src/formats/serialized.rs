//! Serde-backed dump formats

use super::registry::Formatter;
use crate::ast::TagTree;
use crate::error::FormatError;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &TagTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &TagTree) -> Result<String, FormatError> {
        serde_yaml::to_string(tree).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
