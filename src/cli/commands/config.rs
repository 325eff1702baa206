use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        file,
        print_config,
        check,
    } = cmd
    {
        let path = expand_tilde(file);

        if *print_config {
            ConfigLogic::print(&path)?;
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if !*print_config && !*check {
            warning("Nothing to do: use --print and/or --check.");
        }
    }
    Ok(())
}
