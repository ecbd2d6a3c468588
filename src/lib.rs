//! TimeVault library root.
//! Exposes the accounting core, the CLI parser and the high-level run() function.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::In | Commands::Out | Commands::Undo => {
            commands::session::handle(&cli.command, cfg)
        }
        Commands::Status => commands::status::handle(cfg),
        Commands::Timecard { .. } => commands::timecard::handle(&cli.command, cfg),
        Commands::Payroll { .. } => commands::payroll::handle(&cli.command, cfg),
        Commands::Report => commands::report::handle(cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Reorder { .. } => commands::reorder::handle(&cli.command, cfg),
        Commands::Settings { .. } => commands::settings::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Ask { .. } => commands::ask::handle(&cli.command, cfg),
        Commands::Suggest => commands::suggest::handle(cfg),
        Commands::Sync { .. } => commands::sync::handle(&cli.command, cfg),
        Commands::Clear { .. } => commands::clear::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // a second subscriber (embedding, tests) is not an error worth failing on
    let _ = logging::init_tracing(Some(&cfg.log_level));

    // relative names live next to the config file, as `init --db` creates them
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_in(&Config::config_dir(), custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
