//! Per-year and per-activity completion aggregation.
//!
//! Recomputed eagerly and in full on every mutation. The plan holds at
//! most a few dozen activities, so a full fold over every task is cheaper
//! than maintaining incremental counters.

use std::collections::BTreeMap;

use rusqlite::Connection;
use serde::Serialize;

use crate::plan::CurriculumPlan;
use crate::store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: u8,
    pub complete: usize,
    pub total: usize,
    pub percent: i64,
}

/// Rounded completion percentage; 0 when there is nothing to complete.
pub fn percent(complete: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    (100.0 * complete as f64 / total as f64).round() as i64
}

pub fn activity_percent(flags: &[bool]) -> i64 {
    percent(flags.iter().filter(|&&f| f).count(), flags.len())
}

/// Fold every activity into its year's (complete, total) pair, reading
/// current flags from the progress store.
pub fn year_summaries(plan: &CurriculumPlan, conn: &Connection) -> Vec<YearSummary> {
    let mut by_year: BTreeMap<u8, (usize, usize)> = BTreeMap::new();
    for activity in plan.activities() {
        let flags = store::progress_load(conn, &activity.id, activity.tasks.len());
        let entry = by_year.entry(activity.year).or_insert((0, 0));
        entry.0 += flags.iter().filter(|&&f| f).count();
        entry.1 += activity.tasks.len();
    }
    by_year
        .into_iter()
        .map(|(year, (complete, total))| YearSummary {
            year,
            complete,
            total,
            percent: percent(complete, total),
        })
        .collect()
}
