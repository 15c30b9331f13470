//! Recursive schema-to-example resolution.

use serde_json::{json, Map, Value};

use crate::adapters::samples;
use crate::domain::SchemaNode;

/// Field never populated in generated examples.
const UPDATE_TIMESTAMP_FIELD: &str = "updatedAt";

/// Resolves schema nodes into concrete example values.
///
/// Resolution is a pure function of the schema tree and the captured mode;
/// `None` means "no value for this node", which callers treat as skip
/// rather than as an error. A generated `false` or `0` is a valid example,
/// distinct from `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleResolver {
    minimal: bool,
}

impl ExampleResolver {
    /// Create a resolver; in minimal mode objects keep required fields only.
    pub fn new(minimal: bool) -> Self {
        Self { minimal }
    }

    /// Produce an example value for `node`, using `field` for name-based
    /// sample selection.
    pub fn resolve(&self, node: &SchemaNode, field: Option<&str>) -> Option<Value> {
        if field == Some(UPDATE_TIMESTAMP_FIELD) {
            return None;
        }
        match node {
            SchemaNode::Unresolved => None,
            SchemaNode::String {
                format,
                enumeration,
            } => Some(self.resolve_string(format.as_deref(), enumeration, field)),
            SchemaNode::Integer { format } => {
                Some(self.resolve_integer(format.as_deref(), field))
            }
            SchemaNode::Number { format } => Some(self.resolve_number(format.as_deref(), field)),
            SchemaNode::Boolean => Some(Value::Bool(true)),
            SchemaNode::Array { items } => {
                // One representative element stands in for the collection.
                // Items are anonymous; no field name flows into them.
                let element = items
                    .as_deref()
                    .and_then(|items| self.resolve(items, None))
                    .unwrap_or(Value::Null);
                Some(Value::Array(vec![element]))
            }
            SchemaNode::Object {
                properties,
                required,
            } => Some(self.assemble_object(properties, required)),
        }
    }

    fn resolve_string(
        &self,
        format: Option<&str>,
        enumeration: &[Value],
        field: Option<&str>,
    ) -> Value {
        if !enumeration.is_empty() {
            if let Some(value) = samples::enum_sample(enumeration, field) {
                return value;
            }
        }
        if let Some(value) = format.and_then(samples::format_sample) {
            return value;
        }
        Value::String(samples::sample_string(field))
    }

    fn resolve_integer(&self, format: Option<&str>, field: Option<&str>) -> Value {
        if let Some(name) = field {
            if samples::is_calendar_field(name) {
                return json!(samples::CALENDAR_SAMPLE);
            }
            if samples::is_identifier_field(name) {
                return json!(samples::IDENTIFIER_SAMPLE);
            }
        }
        format
            .and_then(samples::format_sample)
            .unwrap_or_else(|| json!(samples::DEFAULT_INTEGER))
    }

    fn resolve_number(&self, format: Option<&str>, field: Option<&str>) -> Value {
        if let Some(name) = field {
            if samples::is_calendar_field(name) {
                return json!(samples::CALENDAR_SAMPLE);
            }
        }
        format
            .and_then(samples::format_sample)
            .unwrap_or_else(|| json!(samples::DEFAULT_NUMBER))
    }

    /// Build an object example from a property map.
    ///
    /// Minimal mode drops properties outside the `required` set entirely;
    /// an unresolvable child is omitted rather than set to null.
    fn assemble_object(&self, properties: &[(String, SchemaNode)], required: &[String]) -> Value {
        let mut result = Map::new();
        for (key, child) in properties {
            if self.minimal && !required.iter().any(|name| name == key) {
                continue;
            }
            if let Some(value) = self.resolve(child, Some(key)) {
                result.insert(key.clone(), value);
            }
        }
        Value::Object(result)
    }
}
