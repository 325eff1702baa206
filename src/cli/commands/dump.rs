use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Dump {
        config,
        infile,
        out_dir,
        format,
        force,
    } = cmd
    {
        let analysis = Core::analyze(&expand_tilde(config), &expand_tilde(infile))?;
        ExportLogic::dump(&analysis, &expand_tilde(out_dir), *format, *force)?;
    }
    Ok(())
}
