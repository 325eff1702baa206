use crate::core::quota::QuotaResolver;
use crate::core::week::week_key_in;
use crate::errors::{AppError, AppResult};
use crate::models::{AverageRow, OvertimeRow, RecordSet, Report};
use crate::utils::round1;
use chrono::{Local, TimeZone};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Calcolo delle due tabelle derivate dal time sheet.
pub struct Aggregator;

/// Per-person running totals used by the overtime table.
#[derive(Default)]
struct PersonTotals {
    actual: f64,
    contracts: BTreeSet<usize>,
}

impl Aggregator {
    /// Both tables; fails before producing either if the input is empty.
    pub fn report(records: &RecordSet, resolver: &QuotaResolver) -> AppResult<Report> {
        Ok(Report {
            average: Self::average_time(records)?,
            overtime: Self::overtime(records, resolver),
        })
    }

    /// Average working time per ISO week (local calendar).
    pub fn average_time(records: &RecordSet) -> AppResult<Vec<AverageRow>> {
        Self::average_time_in(records, &Local)
    }

    /// Average working time per ISO week, bucketing by the calendar of `tz`.
    ///
    /// The divisor is the number of distinct persons in the *whole* table,
    /// not the number active in each week. Rows come out ascending by week
    /// key, each rounded to one decimal.
    pub fn average_time_in<Tz: TimeZone>(
        records: &RecordSet,
        tz: &Tz,
    ) -> AppResult<Vec<AverageRow>> {
        let person_count = records.person_count();
        if person_count == 0 {
            return Err(AppError::EmptyInput);
        }

        let mut weeks: BTreeMap<String, f64> = BTreeMap::new();
        for r in records.records() {
            *weeks.entry(week_key_in(r.timestamp(), tz)?).or_default() += r.duration();
        }

        debug!(
            "Average time: {} weeks, divisor {} persons",
            weeks.len(),
            person_count
        );

        Ok(weeks
            .into_iter()
            .map(|(week_key, total)| AverageRow {
                week_key,
                avg_hours: round1(total / person_count as f64),
            })
            .collect())
    }

    /// Persons whose summed hours exceed their attributed quota.
    ///
    /// Each distinct contract touched by a person counts once, however many
    /// records fall into it; records outside every contract add no quota.
    /// Rows are sorted by overtime descending, then person id ascending.
    pub fn overtime(records: &RecordSet, resolver: &QuotaResolver) -> Vec<OvertimeRow> {
        let mut persons: BTreeMap<&str, PersonTotals> = BTreeMap::new();

        for r in records.records() {
            let totals = persons.entry(r.person_id()).or_default();
            totals.actual += r.duration();
            if let Some(idx) = resolver.resolve_index(r.timestamp()) {
                totals.contracts.insert(idx);
            }
        }

        let contracts = resolver.contracts();
        let mut rows: Vec<OvertimeRow> = persons
            .into_iter()
            .filter_map(|(person_id, totals)| {
                let quota: f64 = totals.contracts.iter().map(|&i| contracts[i].quota()).sum();

                // strict: equality is not overtime
                (totals.actual > quota).then(|| OvertimeRow {
                    person_id: person_id.to_string(),
                    actual_hours: round1(totals.actual),
                    quota_hours: round1(quota),
                    overtime_hours: round1(totals.actual - quota),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.overtime_hours
                .total_cmp(&a.overtime_hours)
                .then_with(|| a.person_id.cmp(&b.person_id))
        });

        debug!("Overtime: {} persons over quota", rows.len());
        rows
    }
}
