use std::path::PathBuf;

use anyhow::Context;
use config::{Config, File};
use serde::Deserialize;

use crate::cli::Cli;

/// Effective generator configuration: defaults file merged with CLI
/// overrides (CLI > environment > file > built-in default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Location of the Swagger document.
    pub source_url: String,
    /// Optional proxy for the document fetch.
    pub proxy: Option<String>,
    /// HTTP verb to target, lower-cased.
    pub verb: String,
    /// Destination directory for generated files.
    pub output_folder: PathBuf,
    /// Restrict generated objects to required fields only.
    pub minimal: bool,
    /// Additionally print each generated example to the console.
    pub verbose: bool,
    /// Treat targets as substrings matched against any path.
    pub match_all: bool,
    /// Pretty-print generated JSON.
    pub pretty: bool,
    /// Path-name targets; empty means every operation.
    pub targets: Vec<String>,
}

/// Options that may be preset from the defaults file.
#[derive(Debug, Deserialize)]
struct FileDefaults {
    url: Option<String>,
    proxy: Option<String>,
    verb: String,
    output: PathBuf,
    pretty: bool,
}

impl Settings {
    /// Build settings from CLI arguments and the optional defaults file.
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let file = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("verb", "post")?
            .set_default("output", ".")?
            .set_default("pretty", false)?
            .build()?;
        let defaults: FileDefaults = file.try_deserialize()?;

        let source_url = cli
            .url
            .clone()
            .or(defaults.url)
            .context("A Swagger source URL is required (--url or `url` in the defaults file)")?;

        Ok(Self {
            source_url,
            proxy: cli.proxy.clone().or(defaults.proxy),
            verb: cli
                .verb
                .clone()
                .unwrap_or(defaults.verb)
                .to_lowercase(),
            output_folder: cli.output.clone().unwrap_or(defaults.output),
            minimal: cli.minimal,
            verbose: cli.verbose,
            match_all: cli.match_all,
            pretty: cli.pretty || defaults.pretty,
            targets: cli.targets.clone(),
        })
    }
}
