//! rinactive library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! business-day / inactivity filtering modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Filter { .. } => cli::commands::filter::handle(&cli.command, cfg),
        Commands::Count { .. } => cli::commands::count::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging before anything else can fail
    logging::init_logging(cli.verbose);

    // 3️⃣ load config once, honouring --config
    let config_path: Option<PathBuf> = cli.config.as_deref().map(utils::path::expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
