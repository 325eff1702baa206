use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Sample;
use crate::errors::AppResult;
use crate::export::{ensure_writable, write_records_csv};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use tracing::debug;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Sample {
        config,
        outfile,
        num,
        id_num,
        force,
    } = cmd
    {
        let cfg = Config::load(&expand_tilde(config))?;
        let resolver = cfg.resolver()?;

        let num = num.unwrap_or(cfg.sample.num);
        let id_num = id_num.unwrap_or(cfg.sample.id_num);
        let sample = Sample::new(resolver.contracts(), num, id_num)?;

        let path = expand_tilde(outfile);
        ensure_writable(&path, *force)?;

        let records = sample.generate();
        debug!("Generated {} sample records for {} persons", records.len(), id_num);

        write_records_csv(&path, &cfg.columns, &records)?;
        success(format!(
            "Sample written: {} ({} entries)",
            path.display(),
            records.len()
        ));
    }
    Ok(())
}
