//! List command implementation

use crate::cli::utils;
use crate::{builtins, SchemaSite};
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("list")
        .about("List every schema page in the index")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("builtins")
                .short('b')
                .long("builtins")
                .help("Also list built-in Kubernetes types (no schema pages)")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let config = utils::load_config(matches)?;
    let site = SchemaSite::new(config)?;

    let paths = site.paths();
    println!("CRD schemas ({}):", paths.len());
    for path in &paths {
        println!("  {}", path.url());
    }

    if matches.get_flag("builtins") {
        println!("\nBuilt-in types ({}):", builtins::all().count());
        for builtin in builtins::all() {
            println!("  {}/{}/{}", builtin.group, builtin.version, builtin.kind);
        }
    }

    Ok(())
}
