//! Views over a dereferenced Swagger document.

use serde::Deserialize;
use serde_json::Value;

/// A fully dereferenced Swagger document, keyed by path.
///
/// Path entries are kept as raw JSON; operations are parsed on lookup so a
/// malformed entry elsewhere in the document never blocks the run.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub paths: serde_json::Map<String, Value>,
}

impl ApiDocument {
    /// Look up the operation exposed at `path` under the given verb.
    pub fn operation(&self, path: &str, verb: &str) -> Option<Operation> {
        let raw = self.paths.get(path)?.get(verb)?;
        Operation::deserialize(raw).ok()
    }
}

/// One path/verb entry of the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A single operation parameter. Only `in: body` parameters carrying a
/// schema are eligible for example generation.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    #[serde(rename = "in", default)]
    pub location: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schema: Option<Value>,
}

impl Parameter {
    /// The parameter's schema, when it is carried in the request body.
    pub fn body_schema(&self) -> Option<&Value> {
        if self.location == "body" {
            self.schema.as_ref()
        } else {
            None
        }
    }
}
