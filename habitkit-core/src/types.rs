//! Core domain types for habitkit
//!
//! A tracked day is a list of [`Task`] records. Habits have no identity of
//! their own: two records sharing a `title` are the same habit on different
//! days, and renaming a task is indistinguishable from abandoning one habit
//! and starting another. Analytics lean on that convention rather than a
//! synthetic habit id.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Task** | One habit instance on one calendar day (the only persisted entity) |
//! | **Habit** | The set of tasks sharing a title |
//! | **Streak** | Consecutive days, walking back from today, with ≥1 completed task |
//! | **Reference day** | "Today" computed in the fixed UTC+5:30 offset, never the local zone |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Priority
// ============================================

/// Priority tier for a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Everyday habit
    #[default]
    Normal,
    /// Flagged as important
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(format!("unknown priority: {}", s)),
        }
    }
}

// ============================================
// Task kind
// ============================================

/// Kind of record: ordinary habit instance or a one-off milestone memory.
///
/// Milestones are stored alongside regular tasks and flow through the same
/// analytics; the kind only matters for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Ordinary habit instance
    #[default]
    Regular,
    /// One-off milestone
    Milestone,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Regular => "regular",
            TaskKind::Milestone => "milestone",
        }
    }
}

impl std::str::FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(TaskKind::Regular),
            "milestone" => Ok(TaskKind::Milestone),
            _ => Err(format!("unknown task kind: {}", s)),
        }
    }
}

// ============================================
// Task
// ============================================

/// A single habit instance on a single calendar day.
///
/// `date` stays a plain `YYYY-MM-DD` string: that is the canonical persisted
/// form, and malformed values must be tolerated (they simply never match a
/// generated date string and are skipped from weekday grouping) rather than
/// rejected at the type level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, assigned by the store on add; immutable
    pub id: String,
    /// Display name; doubles as the habit grouping key
    pub title: String,
    /// Calendar date string, canonical form `YYYY-MM-DD`, reference timezone
    pub date: String,
    /// Optional clock time, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Optional clock time, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Whether the task was done
    pub completed: bool,
    /// Priority tier
    #[serde(default)]
    pub priority: Priority,
    /// Free-form category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Regular task or milestone
    #[serde(default, rename = "type")]
    pub kind: TaskKind,
    /// Why this habit matters, shown alongside the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    /// When the record was created; informational only
    pub created_at: DateTime<Utc>,
    /// Fields the schema does not recognize (persisted records are
    /// schemaless objects)
    #[serde(default = "empty_metadata")]
    pub metadata: serde_json::Value,
}

fn empty_metadata() -> serde_json::Value {
    serde_json::json!({})
}

impl Task {
    /// The habit grouping key, or `None` when the title is missing.
    ///
    /// Records without a usable title are tolerated but excluded from
    /// per-habit grouping.
    pub fn habit_key(&self) -> Option<&str> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

// ============================================
// New task (unsaved)
// ============================================

/// A task that has not been stored yet: everything except the
/// store-assigned `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Display name; doubles as the habit grouping key
    pub title: String,
    /// Calendar date string, canonical form `YYYY-MM-DD`
    pub date: String,
    /// Optional clock time, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Optional clock time, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Whether the task starts out done (normally false)
    #[serde(default)]
    pub completed: bool,
    /// Priority tier
    #[serde(default)]
    pub priority: Priority,
    /// Free-form category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Regular task or milestone
    #[serde(default, rename = "type")]
    pub kind: TaskKind,
    /// Why this habit matters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    /// Extensible metadata bag
    #[serde(default = "empty_metadata")]
    pub metadata: serde_json::Value,
}

impl NewTask {
    /// Create a plain, not-yet-completed task for a title and date.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            start_time: None,
            end_time: None,
            completed: false,
            priority: Priority::Normal,
            category: None,
            kind: TaskKind::Regular,
            motivation: None,
            metadata: empty_metadata(),
        }
    }

    /// Create a milestone record: high priority, gold-themed category.
    pub fn milestone(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            priority: Priority::High,
            category: Some("milestone".to_string()),
            kind: TaskKind::Milestone,
            ..Self::new(title, date)
        }
    }

    /// Attach a start time.
    pub fn at(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Promote to a stored [`Task`] with the given id and creation stamp.
    pub fn into_task(self, id: String, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            completed: self.completed,
            priority: self.priority,
            category: self.category,
            kind: self.kind,
            motivation: self.motivation,
            created_at,
            metadata: self.metadata,
        }
    }
}
