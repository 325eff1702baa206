use crate::core::QuotaResolver;
use crate::errors::{AppError, AppResult};
use crate::models::{Columns, Contract};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One contract period as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Local ISO datetime, e.g. "2020-09-01 00:00:00"
    pub start: String,
    pub end: String,
    /// Total quota in hours for the whole period
    pub quota: f64,
}

/// Column names of the two output tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputColumns {
    #[serde(default = "default_week")]
    pub week: String,
    #[serde(default = "default_avg_time")]
    pub avg_time: String,
    #[serde(default = "default_person")]
    pub person: String,
    #[serde(default = "default_actual")]
    pub actual: String,
    #[serde(default = "default_quota")]
    pub quota: String,
    #[serde(default = "default_overtime")]
    pub overtime: String,
}

fn default_week() -> String {
    "week".to_string()
}
fn default_avg_time() -> String {
    "avg_time".to_string()
}
fn default_person() -> String {
    "id".to_string()
}
fn default_actual() -> String {
    "actual".to_string()
}
fn default_quota() -> String {
    "quota".to_string()
}
fn default_overtime() -> String {
    "overtime".to_string()
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            week: default_week(),
            avg_time: default_avg_time(),
            person: default_person(),
            actual: default_actual(),
            quota: default_quota(),
            overtime: default_overtime(),
        }
    }
}

/// Labels of the PDF report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_avg_time_title")]
    pub avg_time_title: String,
    #[serde(default = "default_avg_time_xlabel")]
    pub avg_time_xlabel: String,
    #[serde(default = "default_avg_time_ylabel")]
    pub avg_time_ylabel: String,
    #[serde(default = "default_overtime_title")]
    pub overtime_title: String,
}

fn default_avg_time_title() -> String {
    "Average working time per week per person".to_string()
}
fn default_avg_time_xlabel() -> String {
    "Year/calendar week".to_string()
}
fn default_avg_time_ylabel() -> String {
    "Average hours per person".to_string()
}
fn default_overtime_title() -> String {
    "Overtime".to_string()
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            avg_time_title: default_avg_time_title(),
            avg_time_xlabel: default_avg_time_xlabel(),
            avg_time_ylabel: default_avg_time_ylabel(),
            overtime_title: default_overtime_title(),
        }
    }
}

/// Parameters of the synthetic data generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default = "default_sample_num")]
    pub num: usize,
    /// Unique person ids; should be well below `num`
    #[serde(default = "default_sample_id_num")]
    pub id_num: usize,
}

fn default_sample_num() -> usize {
    2000
}
fn default_sample_id_num() -> usize {
    50
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            num: default_sample_num(),
            id_num: default_sample_id_num(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub contracts: Vec<ContractConfig>,
    #[serde(default)]
    pub columns: Columns,
    #[serde(default)]
    pub output: OutputColumns,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub sample: SampleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contracts: vec![
                ContractConfig {
                    start: "2020-09-01 00:00:00".to_string(),
                    end: "2021-01-31 23:59:59".to_string(),
                    quota: 10.5 * 12.0,
                },
                ContractConfig {
                    start: "2021-02-01 00:00:00".to_string(),
                    end: "2021-03-31 23:59:59".to_string(),
                    quota: 3.5 * 8.0,
                },
            ],
            columns: Columns::default(),
            output: OutputColumns::default(),
            plot: PlotConfig::default(),
            sample: SampleConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that do not need date parsing; see `resolver()` for those.
    pub fn validate(&self) -> AppResult<()> {
        if self.contracts.is_empty() {
            return Err(AppError::Config(
                "at least one contract must be configured".into(),
            ));
        }

        for (i, c) in self.contracts.iter().enumerate() {
            if !c.quota.is_finite() || c.quota < 0.0 {
                return Err(AppError::Config(format!(
                    "contracts[{i}].quota must be a non-negative number"
                )));
            }
        }

        let inputs = [
            ("columns.date", &self.columns.date),
            ("columns.duration", &self.columns.duration),
            ("columns.id", &self.columns.id),
        ];
        let mut seen = BTreeSet::new();
        for (field, name) in inputs {
            if name.trim().is_empty() {
                return Err(AppError::Config(format!("{field} must not be empty")));
            }
            if !seen.insert(name.as_str()) {
                return Err(AppError::Config(format!(
                    "{field} '{name}' is used for more than one input column"
                )));
            }
        }

        // one group per output table: headers must be unique within a table
        let average = [
            ("output.week", &self.output.week),
            ("output.avg_time", &self.output.avg_time),
        ];
        let overtime = [
            ("output.person", &self.output.person),
            ("output.actual", &self.output.actual),
            ("output.quota", &self.output.quota),
            ("output.overtime", &self.output.overtime),
        ];
        for table in [&average[..], &overtime[..]] {
            let mut seen = BTreeSet::new();
            for (field, name) in table {
                if name.trim().is_empty() {
                    return Err(AppError::Config(format!("{field} must not be empty")));
                }
                if !seen.insert(name.as_str()) {
                    return Err(AppError::Config(format!(
                        "{field} '{name}' is used for more than one output column"
                    )));
                }
            }
        }

        if self.sample.num == 0 {
            return Err(AppError::Config("sample.num must be greater than zero".into()));
        }
        if self.sample.id_num == 0 {
            return Err(AppError::Config(
                "sample.id_num must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// Parse the configured periods into contracts, in file order.
    pub fn contracts(&self) -> AppResult<Vec<Contract>> {
        self.contracts
            .iter()
            .map(|c| Contract::from_iso(&c.start, &c.end, c.quota))
            .collect()
    }

    /// Contracts plus the overlap check.
    pub fn resolver(&self) -> AppResult<QuotaResolver> {
        QuotaResolver::new(self.contracts()?)
    }
}
