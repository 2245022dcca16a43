//! Analytics engine for habitkit
//!
//! Pure derivations over the full task list plus an explicit "now" instant:
//! - Overview: global completion rate, current streak, best weekday, habit
//!   health, activity heatmap ([`overview`])
//! - Consistency: weighted daily-average score for a month ([`consistency`])
//! - Momentum: 3-day-vs-prior-3-day trend ([`momentum`])
//! - Goals: weekly target tracking and day summaries ([`goals`])
//!
//! Every function here is a pure function of its inputs. Nothing reads the
//! wall clock, nothing caches across calls: callers re-derive the whole
//! bundle from a fresh snapshot after each mutation. The engine raises no
//! errors; degenerate inputs (empty list, zero denominators) resolve to
//! documented defaults instead.
//!
//! Two missing-data policies coexist on purpose and must not be unified:
//! the global completion rate only counts records that exist, while the
//! monthly consistency score counts a day with no scheduled tasks as 0%.

pub mod consistency;
pub mod goals;
pub mod momentum;
pub mod overview;

pub use consistency::{day_status, monthly_consistency, DayStatus};
pub use goals::{day_summary, weekly_goal, DaySummary, WeeklyGoal};
pub use momentum::{daily_rates, momentum, DayRate, MomentumTrend, TrendDirection};
pub use overview::{overview, HabitHealth, HeatmapDay, OverviewStats};

use crate::clock::{self, MonthRef};
use crate::types::Task;
use chrono::{DateTime, NaiveDate, Utc};

/// Everything the presentation layer needs for one render, derived in a
/// single pass for a navigation cursor date.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsBundle {
    /// Global stats over the entire record set
    pub overview: OverviewStats,
    /// Weighted daily-average score for the cursor month
    pub monthly_consistency: i32,
    /// Per-day rate series for the cursor month (None for future days)
    pub daily_rates: Vec<DayRate>,
    /// Trend over the cursor month's series
    pub momentum: MomentumTrend,
    /// Goal tracking for the cursor week
    pub weekly: WeeklyGoal,
    /// Today's completion summary
    pub today: DaySummary,
}

/// Derive the full metrics bundle.
///
/// `cursor` is the date the user has navigated to; its month drives the
/// consistency and momentum views, its week drives goal tracking. `now` is
/// the explicit reference instant; callers never let the engine reach for
/// the wall clock.
pub fn compute(tasks: &[Task], cursor: NaiveDate, now: DateTime<Utc>) -> MetricsBundle {
    let month = MonthRef::from_date(cursor);
    let today = clock::date_string(clock::ref_day(now));

    MetricsBundle {
        overview: overview(tasks, now),
        monthly_consistency: monthly_consistency(tasks, month, now),
        daily_rates: daily_rates(tasks, month, now),
        momentum: momentum(tasks, month, now),
        weekly: weekly_goal(tasks, cursor, now),
        today: day_summary(tasks, &today, now),
    }
}

/// `round(100 * part / whole)` as an integer percentage; 0 when `whole` is 0.
pub(crate) fn percent(part: usize, whole: usize) -> i32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as i32
    }
}

/// Completed and total counts for records dated exactly `date`.
pub(crate) fn day_counts(tasks: &[Task], date: &str) -> (usize, usize) {
    let mut completed = 0;
    let mut total = 0;
    for task in tasks.iter().filter(|t| t.date == date) {
        total += 1;
        if task.completed {
            completed += 1;
        }
    }
    (completed, total)
}
