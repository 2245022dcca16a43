//! Momentum: short-window trend over daily consistency.
//!
//! Compares the mean of the three most recent defined daily rates against
//! the three before them. Days after today carry no value at all; unlike
//! the consistency score, the future is unknown rather than missed.

use crate::analytics::{day_counts, percent};
use crate::clock::{self, MonthRef};
use crate::types::Task;
use chrono::{DateTime, NaiveDate, Utc};

/// Minimum defined days before a trend is reported.
const MIN_SAMPLES: usize = 6;

/// Days in each comparison window.
const WINDOW: usize = 3;

/// One point of a month's daily rate series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRate {
    /// Calendar day
    pub date: NaiveDate,
    /// `round(100 * completed / total)`, 0 for a taskless day, `None` for
    /// a day after today
    pub rate: Option<i32>,
}

/// Trend direction over the comparison windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// Recent window above the previous one
    Up,
    /// Recent window below the previous one
    Down,
    /// No meaningful movement, or not enough data
    Flat,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Flat => "flat",
        }
    }
}

/// Momentum classification for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MomentumTrend {
    /// Which way the recent window moved
    pub direction: TrendDirection,
    /// Absolute rounded difference between the window means, in points
    pub magnitude: i32,
}

impl MomentumTrend {
    fn flat() -> Self {
        Self {
            direction: TrendDirection::Flat,
            magnitude: 0,
        }
    }
}

/// Daily completion-rate series for a month.
///
/// Every calendar day of the month appears, in order. Days after today get
/// `rate: None`; today and earlier get a rounded percentage, 0 when nothing
/// was scheduled.
pub fn daily_rates(tasks: &[Task], month: MonthRef, now: DateTime<Utc>) -> Vec<DayRate> {
    let today = clock::ref_day(now);

    month
        .days()
        .into_iter()
        .map(|day| {
            let rate = if day > today {
                None
            } else {
                let date = clock::date_string(day);
                let (completed, total) = day_counts(tasks, &date);
                Some(percent(completed, total))
            };
            DayRate { date: day, rate }
        })
        .collect()
}

/// Classify the month's momentum from its daily rate series.
///
/// Needs at least six defined days; otherwise flat with zero magnitude.
/// The sign of the rounded mean difference decides the direction.
pub fn momentum(tasks: &[Task], month: MonthRef, now: DateTime<Utc>) -> MomentumTrend {
    let defined: Vec<i32> = daily_rates(tasks, month, now)
        .into_iter()
        .filter_map(|d| d.rate)
        .collect();

    if defined.len() < MIN_SAMPLES {
        return MomentumTrend::flat();
    }

    let recent = &defined[defined.len() - WINDOW..];
    let previous = &defined[defined.len() - 2 * WINDOW..defined.len() - WINDOW];

    let mean = |window: &[i32]| window.iter().sum::<i32>() as f64 / WINDOW as f64;
    let diff = (mean(recent) - mean(previous)).round() as i32;

    let direction = match diff {
        d if d > 0 => TrendDirection::Up,
        d if d < 0 => TrendDirection::Down,
        _ => TrendDirection::Flat,
    };

    MomentumTrend {
        direction,
        magnitude: diff.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::task;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    const JUNE: MonthRef = MonthRef {
        year: 2024,
        month: 6,
    };

    #[test]
    fn test_series_masks_future_days() {
        let tasks = vec![task("Read", "2024-06-10", true)];
        let series = daily_rates(&tasks, JUNE, at(2024, 6, 10));
        assert_eq!(series.len(), 30);
        assert_eq!(series[9].rate, Some(100));
        // Taskless past day is a hard zero
        assert_eq!(series[0].rate, Some(0));
        // Tomorrow onward is unknown
        assert_eq!(series[10].rate, None);
        assert_eq!(series[29].rate, None);
    }

    #[test]
    fn test_too_few_samples_is_flat() {
        let tasks = vec![task("Read", "2024-06-01", true)];
        // Only 5 days of June have happened
        let trend = momentum(&tasks, JUNE, at(2024, 6, 5));
        assert_eq!(trend.direction, TrendDirection::Flat);
        assert_eq!(trend.magnitude, 0);
    }

    #[test]
    fn test_upswing() {
        // Days 25-27 at 0%, days 28-30 at 100%, viewed after month end
        let tasks = vec![
            task("Read", "2024-06-25", false),
            task("Read", "2024-06-26", false),
            task("Read", "2024-06-27", false),
            task("Read", "2024-06-28", true),
            task("Read", "2024-06-29", true),
            task("Read", "2024-06-30", true),
        ];
        let trend = momentum(&tasks, JUNE, at(2024, 7, 15));
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.magnitude, 100);
    }

    #[test]
    fn test_downswing() {
        let tasks = vec![
            task("Read", "2024-06-25", true),
            task("Read", "2024-06-26", true),
            task("Read", "2024-06-27", true),
            task("Read", "2024-06-28", false),
            task("Read", "2024-06-29", false),
            task("Read", "2024-06-30", false),
        ];
        let trend = momentum(&tasks, JUNE, at(2024, 7, 15));
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(trend.magnitude, 100);
    }

    #[test]
    fn test_flat_when_windows_match() {
        let tasks = vec![
            task("Read", "2024-06-25", true),
            task("Read", "2024-06-26", true),
            task("Read", "2024-06-27", true),
            task("Read", "2024-06-28", true),
            task("Read", "2024-06-29", true),
            task("Read", "2024-06-30", true),
        ];
        let trend = momentum(&tasks, JUNE, at(2024, 7, 15));
        assert_eq!(trend.direction, TrendDirection::Flat);
        assert_eq!(trend.magnitude, 0);
    }

    #[test]
    fn test_windows_use_defined_days_only() {
        // Mid-month view: defined days are 1..=10; windows are 5-7 vs 8-10
        let tasks = vec![
            task("Read", "2024-06-08", true),
            task("Read", "2024-06-09", true),
            task("Read", "2024-06-10", true),
        ];
        let trend = momentum(&tasks, JUNE, at(2024, 6, 10));
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.magnitude, 100);
    }
}
