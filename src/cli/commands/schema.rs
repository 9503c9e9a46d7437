//! Schema command implementation

use crate::cli::utils;
use crate::SchemaSite;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("schema")
        .about("Resolve one schema and print it to stdout")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(clap::Arg::new("group").required(true).value_name("GROUP"))
        .arg(
            clap::Arg::new("version")
                .required(true)
                .value_name("VERSION"),
        )
        .arg(clap::Arg::new("kind").required(true).value_name("KIND"))
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let config = utils::load_config(matches)?;
    let site = SchemaSite::new(config)?;

    let group = matches.get_one::<String>("group").map(String::as_str);
    let version = matches.get_one::<String>("version").map(String::as_str);
    let kind = matches.get_one::<String>("kind").map(String::as_str);

    let response = site.schema_response(group, version, kind);
    if response.status != 200 {
        anyhow::bail!("{}", response.body);
    }

    println!("{}", response.body);
    Ok(())
}
