//! Endpoint selection and example generation over a dereferenced document.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::adapters::resolver::ExampleResolver;
use crate::config::Settings;
use crate::domain::{ApiDocument, OutputPort, Parameter, SchemaNode};

/// Outcome of one generation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of example files handed to the writer successfully.
    pub written: usize,
}

/// Walks the document's path map and generates one example per eligible
/// body parameter, according to the configured targeting mode.
pub struct ExampleGenerator {
    settings: Settings,
    resolver: ExampleResolver,
    writer: Arc<dyn OutputPort>,
}

impl ExampleGenerator {
    pub fn new(settings: Settings, writer: Arc<dyn OutputPort>) -> Self {
        let resolver = ExampleResolver::new(settings.minimal);
        Self {
            settings,
            resolver,
            writer,
        }
    }

    /// Generate examples for the targeted operations.
    ///
    /// With no targets every operation is processed; with targets and the
    /// match-all flag paths are matched by substring; otherwise each target
    /// names one literal path.
    pub async fn run(&self, document: &ApiDocument) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        if self.settings.targets.is_empty() {
            self.process_all(document, &mut summary).await?;
        } else if self.settings.match_all {
            self.process_matching(document, &mut summary).await?;
        } else {
            self.process_exact(document, &mut summary).await?;
        }
        Ok(summary)
    }

    async fn process_all(&self, document: &ApiDocument, summary: &mut RunSummary) -> Result<()> {
        info!("Processing all endpoints");
        for path in document.paths.keys() {
            let Some(operation) = document.operation(path, &self.settings.verb) else {
                continue;
            };
            for parameter in &operation.parameters {
                let Some(schema) = parameter.body_schema() else {
                    continue;
                };
                // Nothing can satisfy "required only" when the schema marks
                // nothing as required.
                if self.settings.minimal && schema.get("required").is_none() {
                    continue;
                }
                let Some(example) = self.body_example(schema) else {
                    continue;
                };
                self.emit(&example, path, summary).await?;
            }
        }
        Ok(())
    }

    async fn process_matching(
        &self,
        document: &ApiDocument,
        summary: &mut RunSummary,
    ) -> Result<()> {
        for path in document.paths.keys() {
            let matched = self
                .settings
                .targets
                .iter()
                .any(|target| path.contains(target.as_str()));
            if !matched {
                continue;
            }
            let Some(operation) = document.operation(path, &self.settings.verb) else {
                continue;
            };
            self.generate_for(&operation.parameters, path, summary)
                .await?;
        }
        Ok(())
    }

    async fn process_exact(&self, document: &ApiDocument, summary: &mut RunSummary) -> Result<()> {
        for target in &self.settings.targets {
            let path = format!("/{target}");
            // Unknown paths and verbs are skipped without a diagnostic.
            let Some(operation) = document.operation(&path, &self.settings.verb) else {
                continue;
            };
            self.generate_for(&operation.parameters, &path, summary)
                .await?;
        }
        Ok(())
    }

    async fn generate_for(
        &self,
        parameters: &[Parameter],
        path: &str,
        summary: &mut RunSummary,
    ) -> Result<()> {
        for parameter in parameters {
            let Some(schema) = parameter.body_schema() else {
                continue;
            };
            let node = SchemaNode::from_value(schema);
            let Some(example) = self.resolver.resolve(&node, None) else {
                continue;
            };
            self.emit(&example, path, summary).await?;
        }
        Ok(())
    }

    /// Example for a body schema that is either an object with properties
    /// or an array; anything else yields nothing.
    fn body_example(&self, schema: &Value) -> Option<Value> {
        if schema.get("properties").is_none() && schema.get("items").is_none() {
            return None;
        }
        self.resolver.resolve(&SchemaNode::from_value(schema), None)
    }

    async fn emit(&self, example: &Value, path: &str, summary: &mut RunSummary) -> Result<()> {
        let content = if self.settings.pretty {
            serde_json::to_string_pretty(example)?
        } else {
            serde_json::to_string(example)?
        };
        if self.settings.verbose {
            println!("{content}");
        }
        let name = self.derived_name(path);
        if self.writer.write(&content, &name).await.is_ok() {
            summary.written += 1;
        }
        Ok(())
    }

    /// `/pet/store` with verb `post` becomes `op-pet-store-post.json`.
    fn derived_name(&self, path: &str) -> String {
        format!("op{}-{}.json", path.replace('/', "-"), self.settings.verb)
    }
}
