//! mainsboard library root.
//! Exposes the CLI parser, the high-level run() function, the run-log
//! aggregator and the HTTP layer.

pub mod bst;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod server;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let today_override = match &cli.today {
        Some(s) => Some(utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
        None => None,
    };
    let today = today_override.unwrap_or_else(utils::date::today);

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Leaderboard { .. } => cli::commands::leaderboard::handle(&cli.command, cfg, today),
        Commands::Recent { .. } => cli::commands::recent::handle(&cli.command, cfg),
        Commands::Streaks { .. } => cli::commands::streaks::handle(&cli.command, cfg, today),
        Commands::Locations { .. } => cli::commands::locations::handle(&cli.command, cfg),
        Commands::Pokemon { .. } => cli::commands::pokemon::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Bst { .. } => cli::commands::bst::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg, today_override),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load();

    // 3️⃣ diagnostics: the server logs at the configured level, other commands stay quiet
    let level = if cli.verbose || matches!(cli.command, Commands::Serve { .. }) {
        cfg.log_level.as_str()
    } else {
        "warn"
    };
    logging::init(level);

    // 4️⃣ apply run log override from the command line
    if let Some(custom_log) = &cli.log {
        cfg.log_file = custom_log.clone();
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
