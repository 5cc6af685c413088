//! Date bucketing and the curriculum plan builder.
//!
//! A plan is an immutable ordered sequence of activities, each assigned a
//! `[start, end)` date range where `end` is exclusive (the convention the
//! calendar renderer expects) and `due` is the inclusive last day of the
//! range. Buckets always anchor to day 1 of their start month, which keeps
//! month arithmetic free of day-of-month rollback cases.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::content::{ContentTable, Slot};

/// Matches the original schedule constant; overridable via `plan.configure`.
pub const DEFAULT_PLAN_START: &str = "2026-01-01";

pub fn default_start() -> NaiveDate {
    NaiveDate::parse_from_str(DEFAULT_PLAN_START, "%Y-%m-%d").unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    InvalidStep { step: i64 },
    DateOutOfRange { year: i64 },
    DuplicateActivityId { id: String },
    OverlappingBuckets { id: String },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidStep { step } => {
                write!(f, "bucket step must be a positive month count, got {}", step)
            }
            PlanError::DateOutOfRange { year } => {
                write!(f, "bucket start falls outside the representable calendar: year {}", year)
            }
            PlanError::DuplicateActivityId { id } => {
                write!(f, "duplicate activity id: {}", id)
            }
            PlanError::OverlappingBuckets { id } => {
                write!(f, "activity {} overlaps the previous bucket of its tier", id)
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// A contiguous `[start, end)` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Bucket {
    /// Inclusive deadline: the day before the exclusive end.
    pub fn due(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }
}

/// Produces successive `[start, end)` buckets advancing by a fixed number
/// of whole months, with no gap and no overlap between neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCursor {
    base_year: i32,
    month0: i64,
    step: i64,
}

impl BucketCursor {
    pub fn new(start: NaiveDate, step_months: i64) -> Result<Self, PlanError> {
        if step_months <= 0 {
            return Err(PlanError::InvalidStep { step: step_months });
        }
        Ok(Self {
            base_year: start.year(),
            month0: i64::from(start.month0()),
            step: step_months,
        })
    }

    /// Random access to the index-th bucket of the sequence.
    pub fn bucket(&self, index: i64) -> Result<Bucket, PlanError> {
        let from = self.month0 + index * self.step;
        Ok(Bucket {
            start: month_start(self.base_year, from)?,
            end: month_start(self.base_year, from + self.step)?,
        })
    }

    /// Yields the next bucket and moves the cursor past it.
    #[allow(dead_code)]
    pub fn advance(&mut self) -> Result<Bucket, PlanError> {
        let bucket = self.bucket(0)?;
        self.month0 += self.step;
        Ok(bucket)
    }
}

/// Day 1 of the month `month0` months after January of `base_year`.
fn month_start(base_year: i32, month0: i64) -> Result<NaiveDate, PlanError> {
    let year = i64::from(base_year) + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    let year32 = i32::try_from(year).map_err(|_| PlanError::DateOutOfRange { year })?;
    NaiveDate::from_ymd_opt(year32, month, 1).ok_or(PlanError::DateOutOfRange { year })
}

/// One calendar-scheduled curriculum unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    /// First day of the range.
    pub start: NaiveDate,
    /// Exclusive end, as the calendar renderer expects.
    pub end: NaiveDate,
    /// Inclusive human-facing deadline, `end` minus one day.
    pub due: NaiveDate,
    pub year: u8,
    /// Order is significant: completion flags are indexed positionally.
    pub tasks: Vec<String>,
    pub resources: Vec<String>,
    pub why: String,
}

/// The full seven-year schedule, built once and passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumPlan {
    start: NaiveDate,
    variant: String,
    activities: Vec<Activity>,
}

impl CurriculumPlan {
    /// Build the complete ordered activity sequence for a content table.
    ///
    /// Quarter slots advance a 3-month cursor, half slots a 6-month cursor
    /// and year slots a 12-month cursor, all anchored to day 1 of the plan
    /// start's month. Ids are derived from the slot labels so they stay
    /// stable across runs; duplicates and out-of-order buckets within a
    /// tier are build errors.
    pub fn build(start: NaiveDate, table: &ContentTable) -> Result<Self, PlanError> {
        let quarters = BucketCursor::new(start, 3)?;
        let halves = BucketCursor::new(start, 6)?;
        let years = BucketCursor::new(start, 12)?;

        let mut activities = Vec::with_capacity(table.entries.len());
        let mut seen_ids: HashSet<String> = HashSet::new();
        // Last bucket handed out per tier, for the non-overlap check.
        let mut tier_last: HashMap<u8, Bucket> = HashMap::new();

        for entry in &table.entries {
            let year_index = i64::from(entry.year) - 1;
            let (tier, bucket, id, title) = match entry.slot {
                Slot::Quarter(q) => (
                    3u8,
                    quarters.bucket(year_index * 4 + i64::from(q) - 1)?,
                    format!("Y{}Q{}", entry.year, q),
                    format!("Year {} Q{} — {}", entry.year, q, entry.theme),
                ),
                Slot::Half(h) => (
                    6u8,
                    halves.bucket(year_index * 2 + i64::from(h) - 1)?,
                    format!("Y{}H{}{}", entry.year, h, compact(entry.theme)),
                    format!(
                        "Year {} {} — {}",
                        entry.year,
                        if h == 1 { "H1" } else { "H2" },
                        entry.theme
                    ),
                ),
                Slot::Year => (
                    12u8,
                    years.bucket(year_index)?,
                    format!("Y{}{}", entry.year, compact(entry.theme)),
                    format!("Year {} — {}", entry.year, entry.theme),
                ),
            };

            if !seen_ids.insert(id.clone()) {
                return Err(PlanError::DuplicateActivityId { id });
            }
            if let Some(prev) = tier_last.get(&tier) {
                // Identical ranges are parallel tracks (Year 4/5 style);
                // anything else must start at or after the previous end.
                if *prev != bucket && bucket.start < prev.end {
                    return Err(PlanError::OverlappingBuckets { id });
                }
            }
            tier_last.insert(tier, bucket);

            activities.push(Activity {
                id,
                title,
                start: bucket.start,
                end: bucket.end,
                due: bucket.due(),
                year: entry.year,
                tasks: entry.tasks.iter().map(|t| t.to_string()).collect(),
                resources: entry.resources.iter().map(|r| r.to_string()).collect(),
                why: entry.why.to_string(),
            });
        }

        Ok(Self {
            start,
            variant: table.name.to_string(),
            activities,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}

/// Theme with whitespace removed, as used in derived activity ids.
fn compact(theme: &str) -> String {
    theme.chars().filter(|c| !c.is_whitespace()).collect()
}
