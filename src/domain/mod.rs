use async_trait::async_trait;

pub mod document;
pub mod schema;

pub use document::{ApiDocument, Operation, Parameter};
pub use schema::SchemaNode;

/// Destination for serialized examples.
#[async_trait]
pub trait OutputPort: Send + Sync {
    /// Write one serialized example under the given file name.
    async fn write(&self, content: &str, name: &str) -> anyhow::Result<()>;
}
