//! Generate command implementation

use crate::cli::utils;
use crate::SchemaSite;
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Build the static schema site from configured CRD manifests")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Don't write files")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting schema site generation");

    let mut config = utils::load_config(matches)?;

    // Override output path if specified
    if let Some(output_path) = matches.get_one::<String>("output") {
        config.output.base_path = PathBuf::from(output_path);
    }

    let site = SchemaSite::new(config)?;

    if matches.get_flag("dry-run") {
        println!("Dry run mode - no files will be written");
        println!("Schema pages that would be generated: {}", site.paths().len());
        for path in site.paths() {
            println!("  {}", path.url());
        }
        return Ok(());
    }

    let result = site.generate()?;

    println!("Generation completed successfully!");
    println!("Files generated: {}", result.files_generated);
    println!("Output directory: {}", result.output_path.display());

    if !result.errors.is_empty() {
        println!("Skipped targets: {}", result.errors.len());
        for error in &result.errors {
            eprintln!("  Warning: {error}");
        }
    }

    Ok(())
}
