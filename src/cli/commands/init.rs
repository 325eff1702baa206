use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write a default configuration file
/// (two example contracts, default column names and labels).
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Init { file, force } = cmd {
        let path = expand_tilde(file);
        ensure_writable(&path, *force)?;
        ConfigLogic::init(&path)?;
    }
    Ok(())
}
