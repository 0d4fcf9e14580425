//! Siteconf - typed configuration for markdown documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Init has no config to load yet
    if let Commands::Init { name } = &cli.command {
        return cli::init::new_config(name.as_deref(), &cli.config);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Check { args } => cli::check::run_check(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
