use clap::Parser;
use std::path::PathBuf;

/// Generate example JSON request bodies from a Swagger/OpenAPI document.
#[derive(Parser, Debug, Clone)]
#[command(name = "mimesis", version, about, long_about = None)]
pub struct Cli {
    /// Swagger source URL
    #[arg(short, long, env = "MIMESIS_URL")]
    pub url: Option<String>,

    /// Proxy URL for the document fetch
    #[arg(short, long, env = "MIMESIS_PROXY")]
    pub proxy: Option<String>,

    /// HTTP verb to generate examples for
    #[arg(short, long)]
    pub verb: Option<String>,

    /// Folder to save results to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate requests containing required fields only
    #[arg(short, long)]
    pub minimal: bool,

    /// Additionally print each generated example to the console
    #[arg(long)]
    pub verbose: bool,

    /// Treat endpoint arguments as substrings matched against any path
    #[arg(short = 'a', long = "all")]
    pub match_all: bool,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pub pretty: bool,

    /// Path to the defaults file
    #[arg(short, long, env = "MIMESIS_CONFIG", default_value = "mimesis.toml")]
    pub config: PathBuf,

    /// Endpoint paths to generate examples for; empty processes every
    /// operation in the document
    pub targets: Vec<String>,
}
