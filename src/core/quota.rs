use crate::errors::{AppError, AppResult};
use crate::models::Contract;
use tracing::debug;

/// Maps a timestamp to the contract period covering it.
///
/// Contracts are kept in configured order and must not overlap, so a
/// timestamp has at most one covering contract.
#[derive(Debug, Clone, Default)]
pub struct QuotaResolver {
    contracts: Vec<Contract>,
}

impl QuotaResolver {
    pub fn new(contracts: Vec<Contract>) -> AppResult<Self> {
        for (i, a) in contracts.iter().enumerate() {
            if let Some(j) = contracts[i + 1..].iter().position(|b| a.overlaps(b)) {
                return Err(AppError::OverlappingContracts {
                    first: i + 1,
                    second: i + j + 2,
                });
            }
        }

        debug!("Quota resolver built with {} contracts", contracts.len());
        Ok(Self { contracts })
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// First contract (in configured order) covering `timestamp`.
    pub fn resolve(&self, timestamp: i64) -> Option<&Contract> {
        self.resolve_index(timestamp).map(|i| &self.contracts[i])
    }

    /// Position of the covering contract; stable identity used for
    /// quota deduplication.
    pub fn resolve_index(&self, timestamp: i64) -> Option<usize> {
        self.contracts.iter().position(|c| c.covers(timestamp))
    }
}
