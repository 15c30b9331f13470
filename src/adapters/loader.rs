//! Fetching and dereferencing Swagger documents.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::ApiDocument;

/// Number of `$ref` hops along one expansion path before giving up.
const MAX_REF_DEPTH: usize = 32;

/// Errors raised while loading a source document.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Network failure while fetching the document
    #[error("Failed to fetch document: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Non-success HTTP status from the source
    #[error("Source returned HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not valid JSON
    #[error("Document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reference pointing outside the document
    #[error("External reference '{0}' is not supported; only '#/' pointers can be resolved")]
    ExternalRef(String),

    /// Reference with no target in the document
    #[error("Reference '{0}' does not resolve to a value in the document")]
    UnknownRef(String),

    /// Reference chain too deep, most likely a cycle
    #[error("Reference expansion gave up after too many hops; the document likely contains a reference cycle")]
    DepthExceeded,

    /// Proxy URL rejected by the HTTP client
    #[error("Invalid proxy URL: {0}")]
    Proxy(reqwest::Error),
}

/// Loads a Swagger document over HTTP and expands its internal `$ref`
/// pointers so the generator sees a fully inlined schema tree.
pub struct DocumentLoader {
    client: Client,
}

impl DocumentLoader {
    /// Build a loader, optionally routing the fetch through a proxy.
    pub fn new(proxy: Option<&str>) -> Result<Self, LoaderError> {
        let mut builder = Client::builder();
        if let Some(proxy) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy).map_err(LoaderError::Proxy)?);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Fetch, parse, and dereference the document at `url`.
    pub async fn load(&self, url: &str) -> Result<ApiDocument, LoaderError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LoaderError::Status(response.status()));
        }
        let raw: Value = response.json().await?;
        let expanded = dereference(&raw)?;
        let document: ApiDocument = serde_json::from_value(expanded)?;
        debug!("Loaded document with {} path(s)", document.paths.len());
        Ok(document)
    }
}

/// Expand every internal `$ref` in `root` into the value it points at.
pub fn dereference(root: &Value) -> Result<Value, LoaderError> {
    expand(root, root, 0)
}

fn expand(root: &Value, node: &Value, ref_depth: usize) -> Result<Value, LoaderError> {
    match node {
        Value::Object(map) => {
            if let Some(reference) = map.get("$ref").and_then(Value::as_str) {
                if ref_depth >= MAX_REF_DEPTH {
                    return Err(LoaderError::DepthExceeded);
                }
                let pointer = reference
                    .strip_prefix('#')
                    .ok_or_else(|| LoaderError::ExternalRef(reference.to_string()))?;
                let target = root
                    .pointer(pointer)
                    .ok_or_else(|| LoaderError::UnknownRef(reference.to_string()))?;
                return expand(root, target, ref_depth + 1);
            }
            let mut expanded = serde_json::Map::new();
            for (key, child) in map {
                expanded.insert(key.clone(), expand(root, child, ref_depth)?);
            }
            Ok(Value::Object(expanded))
        }
        Value::Array(items) => Ok(Value::Array(
            items
                .iter()
                .map(|item| expand(root, item, ref_depth))
                .collect::<Result<_, _>>()?,
        )),
        other => Ok(other.clone()),
    }
}
