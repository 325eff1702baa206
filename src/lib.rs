//! rTimesheet library root.
//! Exposes the aggregation core (contracts, week keys, overtime), the
//! CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber when `--verbose` is given; otherwise
/// tracing events are discarded.
fn init_tracing(verbose: bool) {
    if verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rtimesheet=debug"));

        // may already be set when run() is called more than once in-process
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Timesheet { .. } => cli::commands::timesheet::handle(&cli.command),
        Commands::Dump { .. } => cli::commands::dump::handle(&cli.command),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command),
        Commands::Sample { .. } => cli::commands::sample::handle(&cli.command),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    dispatch(&cli)
}
