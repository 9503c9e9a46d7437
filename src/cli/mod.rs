//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("schemasite")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Publish Kubernetes CRD validation schemas as a static JSON Schema site")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::generate::command())
            .subcommand(commands::list::command())
            .subcommand(commands::schema::command())
    }

    /// Run the CLI application
    pub fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches),
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches),
            Some(("list", sub_matches)) => commands::list::run(sub_matches),
            Some(("schema", sub_matches)) => commands::schema::run(sub_matches),
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            Ok(PathBuf::from(config_path))
        } else {
            // Look for default config files
            let default_paths = [
                PathBuf::from(".schemasite.yaml"),
                PathBuf::from(".schemasite.yml"),
                PathBuf::from("schemasite.yaml"),
                PathBuf::from("schemasite.yml"),
            ];

            for path in &default_paths {
                if path.exists() {
                    return Ok(path.clone());
                }
            }

            Err(anyhow!("No configuration file found. Use --config to specify a file or create one with 'schemasite init'"))
        }
    }

    /// Load configuration from file
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        crate::Config::from_file(&config_path)
    }
}
