//! Schema tree types for a dereferenced Swagger document.

use serde_json::Value;

/// One fragment of an API data-shape description, tagged by its `type`.
///
/// Nodes are built from an already-dereferenced document; every `$ref`
/// indirection must be expanded before construction. A node whose `type` is
/// missing or unknown becomes [`SchemaNode::Unresolved`] and produces no
/// example value.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String {
        format: Option<String>,
        enumeration: Vec<Value>,
    },
    Integer {
        format: Option<String>,
    },
    Number {
        format: Option<String>,
    },
    Boolean,
    Array {
        items: Option<Box<SchemaNode>>,
    },
    Object {
        /// Property names and child schemas, in document order.
        properties: Vec<(String, SchemaNode)>,
        required: Vec<String>,
    },
    Unresolved,
}

impl SchemaNode {
    /// Build a schema node from a dereferenced JSON fragment.
    pub fn from_value(value: &Value) -> Self {
        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            return SchemaNode::Unresolved;
        };
        match kind {
            "string" => SchemaNode::String {
                format: string_field(value, "format"),
                enumeration: value
                    .get("enum")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default(),
            },
            "integer" => SchemaNode::Integer {
                format: string_field(value, "format"),
            },
            "number" => SchemaNode::Number {
                format: string_field(value, "format"),
            },
            "boolean" => SchemaNode::Boolean,
            "array" => SchemaNode::Array {
                items: value
                    .get("items")
                    .map(|items| Box::new(SchemaNode::from_value(items))),
            },
            "object" => SchemaNode::Object {
                properties: value
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|map| {
                        map.iter()
                            .map(|(key, child)| (key.clone(), SchemaNode::from_value(child)))
                            .collect()
                    })
                    .unwrap_or_default(),
                required: value
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            _ => SchemaNode::Unresolved,
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_type_is_unresolved() {
        let node = SchemaNode::from_value(&json!({"description": "untyped"}));
        assert_eq!(node, SchemaNode::Unresolved);
    }

    #[test]
    fn test_unknown_type_is_unresolved() {
        let node = SchemaNode::from_value(&json!({"type": "file"}));
        assert_eq!(node, SchemaNode::Unresolved);
    }

    #[test]
    fn test_object_keeps_property_order() {
        let node = SchemaNode::from_value(&json!({
            "type": "object",
            "properties": {
                "zebra": {"type": "string"},
                "apple": {"type": "integer"}
            },
            "required": ["zebra"]
        }));
        let SchemaNode::Object { properties, required } = node else {
            panic!("expected an object node");
        };
        let names: Vec<&str> = properties.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["zebra", "apple"]);
        assert_eq!(required, ["zebra"]);
    }

    #[test]
    fn test_array_items_are_parsed() {
        let node = SchemaNode::from_value(&json!({
            "type": "array",
            "items": {"type": "integer", "format": "int64"}
        }));
        assert_eq!(
            node,
            SchemaNode::Array {
                items: Some(Box::new(SchemaNode::Integer {
                    format: Some("int64".to_string())
                }))
            }
        );
    }
}
