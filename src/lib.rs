//! # Mimesis
//!
//! Mimesis generates example JSON request bodies for the operations of a
//! Swagger/OpenAPI document. It fetches the document, expands its internal
//! `$ref` pointers, and walks each targeted operation's body schema to
//! produce one deterministic example per operation, written as
//! `op<path>-<verb>.json` files.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mimesis::adapters::driver::ExampleGenerator;
//! use mimesis::adapters::loader::DocumentLoader;
//! use mimesis::adapters::writer::FileWriter;
//!
//! # async fn run(settings: mimesis::config::Settings) -> anyhow::Result<()> {
//! let loader = DocumentLoader::new(settings.proxy.as_deref())?;
//! let document = loader.load(&settings.source_url).await?;
//!
//! let writer = Arc::new(FileWriter::new(settings.output_folder.clone()));
//! let generator = ExampleGenerator::new(settings, writer);
//! let summary = generator.run(&document).await?;
//! println!("{} example(s) written", summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Mimesis follows Hexagonal Architecture:
//! - **Domain**: schema and document types, output port
//! - **Adapters**: loader, sample providers, resolver, driver, writer
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
