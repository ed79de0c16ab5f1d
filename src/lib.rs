//! rbreakcheck library root.
//! Exposes the CLI parser, the high-level run() function, the
//! reconciliation core and the adapters around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());

    // `init` must work even when an old file no longer parses
    let cfg = if matches!(cli.command, Commands::Init) {
        Config::default()
    } else {
        Config::load(&config_path)?
    };

    dispatch(&cli, &cfg, &config_path)
}
