pub mod aggregator;
pub mod config;
pub mod logic;
pub mod quota;
pub mod sample;
pub mod week;

pub use aggregator::Aggregator;
pub use quota::QuotaResolver;
pub use sample::Sample;
pub use week::{week_key, week_key_in};
