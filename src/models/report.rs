use serde::Serialize;

/// Average working time per person for one ISO week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageRow {
    pub week_key: String,
    pub avg_hours: f64,
}

/// Hours worked beyond the attributed contract quota.
/// Only built for persons with `actual_hours > quota_hours`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeRow {
    pub person_id: String,
    pub actual_hours: f64,
    pub quota_hours: f64,
    pub overtime_hours: f64,
}

/// Both derived tables of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub average: Vec<AverageRow>,
    pub overtime: Vec<OvertimeRow>,
}
