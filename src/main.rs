//! Schemasite CLI binary

use anyhow::Result;

use schemasite::cli::CliApp;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schemasite=info".into()),
        )
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    CliApp::run(&matches)
}
