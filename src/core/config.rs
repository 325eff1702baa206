use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::format_timestamp;
use crate::utils::format_hours;
use std::fs;
use std::path::Path;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        println!("{}", content);
        Ok(())
    }

    /// Full validation, contract dates and overlaps included.
    pub fn check(path: &Path) -> AppResult<()> {
        let cfg = Config::load(path)?;
        let resolver = cfg.resolver()?;

        for (i, c) in resolver.contracts().iter().enumerate() {
            info(format!(
                "Contract #{}: {} → {} ({} h)",
                i + 1,
                format_timestamp(c.start()),
                format_timestamp(c.end()),
                format_hours(c.quota())
            ));
        }

        success(format!("Configuration file is valid: {}", path.display()));
        Ok(())
    }

    /// Write the default configuration to `path`.
    pub fn init(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, Config::default().to_yaml()?)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
