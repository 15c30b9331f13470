use std::sync::Arc;

use clap::Parser;
use mimesis::adapters::driver::ExampleGenerator;
use mimesis::adapters::loader::DocumentLoader;
use mimesis::adapters::writer::FileWriter;
use mimesis::cli::Cli;
use mimesis::config::Settings;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!("Fetching Swagger document from {}", settings.source_url);
    let loader = DocumentLoader::new(settings.proxy.as_deref())?;
    let document = loader.load(&settings.source_url).await?;

    if !settings.targets.is_empty() {
        info!(
            "Generating examples for the following endpoints: {}",
            settings.targets.join(", ")
        );
    }

    let writer = Arc::new(FileWriter::new(settings.output_folder.clone()));
    let generator = ExampleGenerator::new(settings, writer);
    let summary = generator.run(&document).await?;
    info!("Generated {} example file(s)", summary.written);

    Ok(())
}
