//! Goal tracking: weekly targets and day summaries.

use crate::analytics::{day_counts, percent};
use crate::clock;
use crate::types::Task;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// Weekly goal tracking for the week containing the navigation cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyGoal {
    /// Monday of the tracked week
    pub week_start: chrono::NaiveDate,
    /// Sunday of the tracked week
    pub week_end: chrono::NaiveDate,
    /// Distinct habit titles with at least one record in the week
    pub habit_count: usize,
    /// Days of the week that have happened: 0 for a future week, 7 for a
    /// past one, Monday through today inclusive otherwise
    pub days_elapsed: u32,
    /// `habit_count * days_elapsed`, floored at 1
    pub target: usize,
    /// Completed tasks in the week dated no later than today
    pub completed: usize,
    /// `round(100 * completed / target)`
    pub percent: i32,
}

/// Compute weekly goal progress for the week containing `cursor`.
///
/// The target assumes every habit active this week should happen once per
/// elapsed day; the floor of 1 keeps an empty week from dividing by zero.
pub fn weekly_goal(tasks: &[Task], cursor: chrono::NaiveDate, now: DateTime<Utc>) -> WeeklyGoal {
    let today = clock::ref_day(now);
    let week_start = clock::week_start(cursor);
    let week_end = week_start + Duration::days(6);

    let weekly: Vec<&Task> = tasks
        .iter()
        .filter(|t| {
            clock::parse_date(&t.date).is_some_and(|d| d >= week_start && d <= week_end)
        })
        .collect();

    let habits: HashSet<&str> = weekly.iter().filter_map(|t| t.habit_key()).collect();

    let days_elapsed = if week_start > today {
        0
    } else if week_end < today {
        7
    } else {
        clock::days_inclusive(week_start, week_end.min(today)).len() as u32
    };

    let target = (habits.len() * days_elapsed as usize).max(1);

    let completed = weekly
        .iter()
        .filter(|t| {
            t.completed && clock::parse_date(&t.date).is_some_and(|d| d <= today)
        })
        .count();

    WeeklyGoal {
        week_start,
        week_end,
        habit_count: habits.len(),
        days_elapsed,
        target,
        completed,
        percent: percent(completed, target),
    }
}

/// Completion summary for a single day, plus the global missed count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The summarized date, `YYYY-MM-DD`
    pub date: String,
    /// Tasks scheduled that day
    pub total: usize,
    /// Tasks completed that day
    pub completed: usize,
    /// `round(100 * completed / total)`; 0 when nothing scheduled
    pub percent: i32,
    /// Incomplete tasks dated strictly before today, across all history
    pub missed: usize,
}

/// Summarize one calendar day and count everything missed before today.
pub fn day_summary(tasks: &[Task], date: &str, now: DateTime<Utc>) -> DaySummary {
    let (completed, total) = day_counts(tasks, date);
    let today = clock::date_string(clock::ref_day(now));

    let missed = tasks
        .iter()
        .filter(|t| !t.completed && !t.date.is_empty() && t.date < today)
        .count();

    DaySummary {
        date: date.to_string(),
        total,
        completed,
        percent: percent(completed, total),
        missed,
    }
}
