use crate::config::Config;
use crate::core::{Aggregator, QuotaResolver};
use crate::errors::AppResult;
use crate::models::{RecordSet, Report};
use std::path::Path;
use tracing::info;

/// Config, input table and derived tables of one run.
pub struct Analysis {
    pub config: Config,
    pub resolver: QuotaResolver,
    pub records: RecordSet,
    pub report: Report,
}

pub struct Core;

impl Core {
    /// Load config and time sheet, then compute both tables.
    ///
    /// Every validation (config, contracts, records, empty input) happens
    /// here, before any output is written.
    pub fn analyze(config_path: &Path, infile: &Path) -> AppResult<Analysis> {
        let config = Config::load(config_path)?;
        let resolver = config.resolver()?;
        let records = RecordSet::from_path(infile, &config.columns)?;

        info!(
            records = records.len(),
            persons = records.person_count(),
            contracts = resolver.contracts().len(),
            "time sheet loaded"
        );

        let report = Aggregator::report(&records, &resolver)?;

        Ok(Analysis {
            config,
            resolver,
            records,
            report,
        })
    }
}
