//! Overview statistics over the entire record set.
//!
//! Global completion rate, current streak, weekday patterns, per-habit
//! health over a rolling window, and the activity heatmap.

use crate::analytics::percent;
use crate::clock;
use crate::format;
use crate::types::Task;
use chrono::{DateTime, Datelike, Duration, Utc};
use std::collections::{HashMap, HashSet};

/// Rolling window for per-habit health, in days.
pub const HEALTH_WINDOW_DAYS: i64 = 30;

/// Span of the activity heatmap, in days back from today.
pub const HEATMAP_WINDOW_DAYS: i64 = 365;

/// One cell of the activity heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapDay {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Completed tasks on that date
    pub count: usize,
    /// Intensity bucket: 0 empty, 1 light, 2 medium, 3 heavy, 4 super
    pub level: u8,
}

/// Success rate for one habit over the rolling window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitHealth {
    /// Habit title
    pub name: String,
    /// `round(100 * completed / total)` within the window
    pub rate: i32,
}

/// The overview metrics bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStats {
    /// `round(100 * completed / total)` over every record; 0 when empty.
    ///
    /// Counts only records that exist; days with nothing scheduled do not
    /// drag this down. The monthly consistency score applies the opposite
    /// policy; the two are intentionally different.
    pub completion_rate: i32,
    /// Consecutive days with ≥1 completed task, walking back from today
    pub streak: u32,
    /// Completed records, all time
    pub total_wins: usize,
    /// Weekday with the most completions, Sunday=0; `None` without data
    pub best_day: Option<u8>,
    /// Completed-task count per weekday, Sunday=0
    pub day_of_week: [usize; 7],
    /// Per-habit success rates, best first
    pub habit_health: Vec<HabitHealth>,
    /// Daily activity for the last [`HEATMAP_WINDOW_DAYS`] days, oldest first
    pub heatmap: Vec<HeatmapDay>,
}

impl OverviewStats {
    /// Display name for the best weekday, `"N/A"` without data.
    pub fn best_day_name(&self) -> &'static str {
        match self.best_day {
            Some(day) => format::day_name(day),
            None => "N/A",
        }
    }
}

/// Derive the overview bundle from the full record set.
pub fn overview(tasks: &[Task], now: DateTime<Utc>) -> OverviewStats {
    let today = clock::ref_day(now);

    let total_wins = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = percent(total_wins, tasks.len());

    // Current streak: walk back one calendar day at a time through the set
    // of dates with at least one completion. Today not being done yet does
    // not break a run that is still alive from yesterday.
    let completed_dates: HashSet<&str> = tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.date.as_str())
        .collect();

    let mut cursor = Some(today);
    if !completed_dates.contains(clock::date_string(today).as_str()) {
        cursor = today.pred_opt();
    }
    let mut streak = 0u32;
    while let Some(day) = cursor {
        if !completed_dates.contains(clock::date_string(day).as_str()) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }

    // Weekday buckets over completions; malformed dates are skipped
    let mut day_of_week = [0usize; 7];
    for task in tasks.iter().filter(|t| t.completed) {
        if let Some(date) = clock::parse_date(&task.date) {
            day_of_week[date.weekday().num_days_from_sunday() as usize] += 1;
        }
    }

    // First strictly-greater bucket wins; all-zero means no data
    let mut best_day = None;
    let mut best_count = 0usize;
    for (index, &count) in day_of_week.iter().enumerate() {
        if count > best_count {
            best_count = count;
            best_day = Some(index as u8);
        }
    }

    let habit_health = habit_health(tasks, now);
    let heatmap = heatmap(tasks, now);

    OverviewStats {
        completion_rate,
        streak,
        total_wins,
        best_day,
        day_of_week,
        habit_health,
        heatmap,
    }
}

/// Per-habit success rates over the rolling window, best first.
///
/// Only records dated strictly after `today - 30 days` count; records with
/// a blank title or unparseable date are excluded from grouping.
pub fn habit_health(tasks: &[Task], now: DateTime<Utc>) -> Vec<HabitHealth> {
    let cutoff = clock::ref_day(now) - Duration::days(HEALTH_WINDOW_DAYS);

    let mut groups: HashMap<&str, (usize, usize)> = HashMap::new();
    for task in tasks {
        let Some(key) = task.habit_key() else {
            continue;
        };
        let Some(date) = clock::parse_date(&task.date) else {
            continue;
        };
        if date <= cutoff {
            continue;
        }
        let entry = groups.entry(key).or_insert((0, 0));
        entry.1 += 1;
        if task.completed {
            entry.0 += 1;
        }
    }

    let mut health: Vec<HabitHealth> = groups
        .into_iter()
        .map(|(name, (completed, total))| HabitHealth {
            name: name.to_string(),
            rate: percent(completed, total),
        })
        .collect();

    // Rate descending; title breaks ties so output is deterministic
    health.sort_by(|a, b| b.rate.cmp(&a.rate).then_with(|| a.name.cmp(&b.name)));
    health
}

/// Daily completion counts for the trailing year, oldest day first.
pub fn heatmap(tasks: &[Task], now: DateTime<Utc>) -> Vec<HeatmapDay> {
    let today = clock::ref_day(now);
    let start = today - Duration::days(HEATMAP_WINDOW_DAYS);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for task in tasks.iter().filter(|t| t.completed) {
        *counts.entry(task.date.as_str()).or_insert(0) += 1;
    }

    clock::days_inclusive(start, today)
        .into_iter()
        .map(|day| {
            let date = clock::date_string(day);
            let count = counts.get(date.as_str()).copied().unwrap_or(0);
            let level = match count {
                0 => 0,
                1..=2 => 1,
                3..=4 => 2,
                5..=6 => 3,
                _ => 4,
            };
            HeatmapDay { date, count, level }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::task;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input_defaults() {
        let stats = overview(&[], at(2024, 1, 3));
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.best_day, None);
        assert_eq!(stats.best_day_name(), "N/A");
        assert!(stats.habit_health.is_empty());
        assert_eq!(stats.day_of_week, [0; 7]);
    }

    #[test]
    fn test_completion_rate_rounds() {
        let tasks = vec![
            task("Read", "2024-01-01", true),
            task("Read", "2024-01-02", true),
            task("Read", "2024-01-03", false),
        ];
        let stats = overview(&tasks, at(2024, 1, 3));
        assert_eq!(stats.completion_rate, 67);
        assert_eq!(stats.total_wins, 2);
    }

    #[test]
    fn test_streak_starts_yesterday_when_today_open() {
        // Yesterday and the day before are complete, today is not:
        // the run survives at length 2
        let tasks = vec![
            task("Read", "2024-01-01", true),
            task("Read", "2024-01-02", true),
            task("Read", "2024-01-03", false),
        ];
        let stats = overview(&tasks, at(2024, 1, 3));
        assert_eq!(stats.streak, 2);
    }

    #[test]
    fn test_streak_today_completed_extends_run() {
        let tasks = vec![
            task("Read", "2024-01-01", true),
            task("Read", "2024-01-02", true),
            task("Read", "2024-01-03", true),
        ];
        let stats = overview(&tasks, at(2024, 1, 3));
        assert_eq!(stats.streak, 3);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let tasks = vec![
            task("Read", "2024-01-01", true),
            // Jan 2 missing
            task("Read", "2024-01-03", true),
        ];
        let stats = overview(&tasks, at(2024, 1, 3));
        assert_eq!(stats.streak, 1);
    }

    #[test]
    fn test_streak_zero_after_two_open_days() {
        let tasks = vec![task("Read", "2024-01-01", true)];
        let stats = overview(&tasks, at(2024, 1, 3));
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn test_best_day_mondays() {
        // 2024-01-01 and 2024-01-08 are Mondays; 2024-01-03 a Wednesday
        let tasks = vec![
            task("Read", "2024-01-01", true),
            task("Read", "2024-01-08", true),
            task("Read", "2024-01-03", true),
            task("Run", "2024-01-03", false),
        ];
        let stats = overview(&tasks, at(2024, 1, 8));
        assert_eq!(stats.best_day, Some(1));
        assert_eq!(stats.best_day_name(), "Monday");
        assert_eq!(stats.day_of_week[1], 2);
        assert_eq!(stats.day_of_week[3], 1);
    }

    #[test]
    fn test_best_day_none_without_completions() {
        let tasks = vec![task("Read", "2024-01-01", false)];
        let stats = overview(&tasks, at(2024, 1, 3));
        assert_eq!(stats.best_day, None);
    }

    #[test]
    fn test_habit_health_window() {
        // now = 2024-05-15 -> cutoff 2024-04-15, exclusive
        let tasks = vec![
            task("Read", "2024-05-01", true),
            task("Read", "2024-05-02", true),
            task("Read", "2024-05-03", true),
            task("Read", "2024-05-04", false),
            // outside the window, must not enter the denominator
            task("Read", "2024-04-01", false),
            task("Read", "2024-04-15", false),
        ];
        let health = habit_health(&tasks, at(2024, 5, 15));
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].name, "Read");
        assert_eq!(health[0].rate, 75);
    }

    #[test]
    fn test_habit_health_sorted_best_first() {
        let tasks = vec![
            task("Run", "2024-05-01", false),
            task("Run", "2024-05-02", true),
            task("Read", "2024-05-01", true),
            task("Read", "2024-05-02", true),
        ];
        let health = habit_health(&tasks, at(2024, 5, 15));
        assert_eq!(health[0].name, "Read");
        assert_eq!(health[0].rate, 100);
        assert_eq!(health[1].name, "Run");
        assert_eq!(health[1].rate, 50);
    }

    #[test]
    fn test_habit_health_skips_blank_titles_and_bad_dates() {
        let tasks = vec![
            task("", "2024-05-01", true),
            task("Read", "not-a-date", true),
            task("Read", "2024-05-02", true),
        ];
        let health = habit_health(&tasks, at(2024, 5, 15));
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].rate, 100);
    }

    #[test]
    fn test_heatmap_levels() {
        let mut tasks = Vec::new();
        for i in 0..7 {
            tasks.push(task(&format!("H{}", i), "2024-05-14", true));
        }
        tasks.push(task("Read", "2024-05-13", true));
        tasks.push(task("Run", "2024-05-12", false));

        let map = heatmap(&tasks, at(2024, 5, 15));
        assert_eq!(map.len(), HEATMAP_WINDOW_DAYS as usize + 1);
        assert_eq!(map.last().unwrap().date, "2024-05-15");

        let by_date: std::collections::HashMap<&str, &HeatmapDay> =
            map.iter().map(|d| (d.date.as_str(), d)).collect();
        assert_eq!(by_date["2024-05-14"].count, 7);
        assert_eq!(by_date["2024-05-14"].level, 4);
        assert_eq!(by_date["2024-05-13"].level, 1);
        // Incomplete tasks never light a cell
        assert_eq!(by_date["2024-05-12"].level, 0);
    }
}
