//! Period consistency scoring: weighted daily averages.
//!
//! Each enumerated day contributes its own completion ratio to the mean, and
//! a day with nothing scheduled contributes 0: a missed day, not an excluded
//! one. This is deliberately NOT the policy of the global completion rate.

use crate::analytics::day_counts;
use crate::clock::{self, MonthRef};
use crate::types::Task;
use chrono::{DateTime, Utc};

/// Classification of a single calendar day for the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// No tasks scheduled
    Empty,
    /// Every task completed
    Perfect,
    /// At least half completed
    Good,
    /// Something done, less than half
    Progress,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Empty => "empty",
            DayStatus::Perfect => "perfect",
            DayStatus::Good => "good",
            DayStatus::Progress => "progress",
        }
    }
}

/// Classify one calendar day by its completion percentage.
pub fn day_status(tasks: &[Task], date: &str) -> DayStatus {
    let (completed, total) = day_counts(tasks, date);
    if total == 0 {
        return DayStatus::Empty;
    }
    let percentage = (completed as f64 / total as f64) * 100.0;
    if percentage == 100.0 {
        DayStatus::Perfect
    } else if percentage >= 50.0 {
        DayStatus::Good
    } else {
        DayStatus::Progress
    }
}

/// Weighted daily-average consistency score for a month, as a 0-100
/// integer percentage.
///
/// Enumerates every day from the first of the month through the earlier of
/// the last of the month and today; averages the per-day completion ratios
/// (0 for taskless days) and rounds. A month with no enumerable days (one
/// entirely in the future) scores 0.
pub fn monthly_consistency(tasks: &[Task], month: MonthRef, now: DateTime<Utc>) -> i32 {
    let today = clock::ref_day(now);
    let end = month.last_day().min(today);
    let days = clock::days_inclusive(month.first_day(), end);
    if days.is_empty() {
        return 0;
    }

    let mut ratio_sum = 0.0;
    for day in &days {
        let date = clock::date_string(*day);
        let (completed, total) = day_counts(tasks, &date);
        if total > 0 {
            ratio_sum += completed as f64 / total as f64;
        }
    }

    ((ratio_sum / days.len() as f64) * 100.0).round() as i32
}
