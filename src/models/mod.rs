pub mod contract;
pub mod record;
pub mod report;

pub use contract::Contract;
pub use record::{Columns, Record, RecordSet};
pub use report::{AverageRow, OvertimeRow, Report};
