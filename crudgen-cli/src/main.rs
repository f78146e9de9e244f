//! crudgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::GenerateCommand;
use crudgen_lib::config::GeneratorConfig;
use crudgen_lib::observability::{self, LogFormat};

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Scaffold Laravel REST CRUD resources", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./crudgen.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Diagnostic output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a complete CRUD resource
    #[command(alias = "crud:generate")]
    Generate(GenerateCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose, cli.log_format)?;

    let config = GeneratorConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Generate(cmd) => {
            cmd.execute(config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "crudgen",
            "-vv",
            "generate",
            "Product",
            "--fields",
            "title:string,price:decimal:nullable",
            "--relations",
            "belongsTo:Category",
            "--force",
            "--path",
            "backend",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Generate(cmd) = cli.command;
        assert_eq!(cmd.name, "Product");
        assert_eq!(cmd.fields.as_deref(), Some("title:string,price:decimal:nullable"));
        assert_eq!(cmd.relations.as_deref(), Some("belongsTo:Category"));
        assert!(cmd.force);
        assert_eq!(cmd.path, Some(PathBuf::from("backend")));
    }

    #[test]
    fn test_parse_alias_and_global_config() {
        let cli = Cli::try_parse_from(["crudgen", "crud:generate", "Tag", "--config", "other.toml"])
            .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert_eq!(cli.log_format, LogFormat::Compact);
        let Commands::Generate(cmd) = cli.command;
        assert_eq!(cmd.name, "Tag");
        assert!(cmd.fields.is_none());
        assert!(cmd.relations.is_none());
        assert!(!cmd.force);
    }

    #[test]
    fn test_name_is_required() {
        assert!(Cli::try_parse_from(["crudgen", "generate"]).is_err());
    }
}
