use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Timesheet {
        config,
        infile,
        outfile,
        force,
    } = cmd
    {
        let analysis = Core::analyze(&expand_tilde(config), &expand_tilde(infile))?;
        ExportLogic::pdf(&analysis, &expand_tilde(outfile), *force)?;
    }
    Ok(())
}
