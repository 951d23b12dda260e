//! tourgen - turn a tour of annotated example files into documentation pages.

mod build;
mod cli;
mod config;
mod error;
mod example;
mod generator;
mod init;
mod manifest;
mod utils;

use anyhow::Result;
use build::{build_site, check_site};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_project;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init { .. } => new_project(&config, &cli.config),
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Check => check_site(&config).map(|_| ()),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every setting has a default.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.is_file() && !cli.is_init() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate(cli)?;

    Ok(config)
}
