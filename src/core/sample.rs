use crate::errors::{AppError, AppResult};
use crate::models::{Contract, Record};
use crate::utils::round1;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Builder;

/// Generatore di time sheet sintetici per i test.
///
/// Produces `num` working slots spread over the given contract periods,
/// shared among `id_num` random persons. Durations are multiples of 0.1h
/// between 0.0 and 4.9.
pub struct Sample<'a> {
    contracts: &'a [Contract],
    num: usize,
    id_num: usize,
}

impl<'a> Sample<'a> {
    pub fn new(contracts: &'a [Contract], num: usize, id_num: usize) -> AppResult<Self> {
        if contracts.is_empty() {
            return Err(AppError::Config(
                "sample generation needs at least one contract".into(),
            ));
        }
        if num == 0 || id_num == 0 {
            return Err(AppError::Config(
                "sample sizes 'num' and 'id_num' must be greater than zero".into(),
            ));
        }

        Ok(Self {
            contracts,
            num,
            id_num,
        })
    }

    pub fn generate(&self) -> Vec<Record> {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Record> {
        let ids: Vec<String> = (0..self.id_num)
            .map(|_| Builder::from_random_bytes(rng.r#gen()).into_uuid().to_string())
            .collect();

        (0..self.num)
            .filter_map(|_| {
                let contract = self.contracts.choose(rng)?;
                let person = ids.choose(rng)?;

                let timestamp = rng.gen_range(contract.start()..contract.end());
                let duration = round1(rng.gen_range(0..50) as f64 / 10.0);
                Record::new(timestamp, person.as_str(), duration).ok()
            })
            .collect()
    }
}
