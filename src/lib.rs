//! envwatch library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod forecast;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::forecast::GeminiClient;
use crate::utils::path::expand_tilde;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => return cli::commands::init::handle(config_path, cli.test),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => {
            return cli::commands::config::handle(
                *print_config,
                *edit_config,
                editor,
                cfg,
                config_path,
            );
        }
        _ => {}
    }

    // every other command runs inside a session
    let mut session = start_session(cli, cfg)?;

    match &cli.command {
        Commands::Add(args) => cli::commands::add::handle(&mut session, args),
        Commands::Status => cli::commands::status::handle(&mut session),
        Commands::List(args) => cli::commands::list::handle(&mut session, args),
        Commands::Export(args) => cli::commands::export::handle(&mut session, args),
        Commands::Forecast(args) => {
            let client = GeminiClient::from_config(cfg)?;
            cli::commands::forecast::handle(&mut session, cfg, &client, args)
        }
        Commands::Ask(args) => {
            let client = GeminiClient::from_config(cfg)?;
            cli::commands::ask::handle(&mut session, cfg, &client, args)
        }
        Commands::Shell => cli::commands::shell::handle(&mut session, cfg),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

fn start_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    match &cli.from {
        Some(file) => Session::import(&expand_tilde(file), cfg.default_location.clone()),
        None => Ok(Session::new(cfg.default_location.clone())),
    }
}

fn init_logging(cfg: &Config) {
    // RUST_LOG wins over the configured level
    env_logger::Builder::new()
        .parse_filters(&cfg.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .try_init()
        .ok();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path: PathBuf = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ logging
    init_logging(&cfg);
    log::debug!("configuration loaded from {}", config_path.display());

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
