//! Init command implementation

use crate::Config;
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(".schemasite.yaml"),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing configuration file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = PathBuf::from(matches.get_one::<String>("output").unwrap());

    if output_path.exists() && !matches.get_flag("force") {
        anyhow::bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            output_path.display()
        );
    }

    info!("Initializing configuration file: {:?}", output_path);

    let config = Config::default();
    config.save_to_file(&output_path)?;

    println!("Configuration file created: {}", output_path.display());
    println!("Point crds.path at your manifest directory to get started.");

    Ok(())
}
