//! Task mutation flows over a [`TaskStore`].
//!
//! The completion-window rule lives here, not in the engine or the store:
//! a task's `completed` flag may only change while its `date` is the current
//! day in the reference timezone. Future days have not happened yet and past
//! days are frozen history.

use crate::clock;
use crate::error::{Error, LockReason, Result};
use crate::store::TaskStore;
use crate::types::{NewTask, Task};
use chrono::{DateTime, Utc};

/// Mutation front-end for a task store.
pub struct TaskManager<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskManager<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Persist a new task.
    pub fn add(&mut self, draft: NewTask) -> Result<Task> {
        self.store.add(draft)
    }

    /// Flip a task's completion flag.
    ///
    /// Rejected with [`Error::CompletionLocked`] unless the task is dated
    /// today in the reference timezone.
    pub fn toggle(&mut self, id: &str, now: DateTime<Utc>) -> Result<Task> {
        let mut task = self.find(id)?;

        if !clock::is_today(&task.date, now) {
            let reason = if clock::is_future(&task.date, now) {
                LockReason::FutureDate
            } else {
                LockReason::PastDate
            };
            tracing::debug!(id, date = %task.date, %reason, "Rejected completion toggle");
            return Err(Error::CompletionLocked {
                date: task.date,
                reason,
            });
        }

        task.completed = !task.completed;
        self.store.update(&task)
    }

    /// Rename a task.
    ///
    /// Because the title is the habit key, a rename re-buckets this record
    /// under another habit; history under the old title is untouched.
    pub fn rename(&mut self, id: &str, title: &str) -> Result<Task> {
        let mut task = self.find(id)?;
        task.title = title.to_string();
        self.store.update(&task)
    }

    /// Delete a task by id.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)
    }

    /// Wipe every record (full reset).
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()
    }

    /// All records.
    pub fn all(&self) -> Result<Vec<Task>> {
        self.store.get_all()
    }

    /// Records for one calendar date.
    pub fn for_date(&self, date: &str) -> Result<Vec<Task>> {
        self.store.get_by_date(date)
    }

    fn find(&self, id: &str) -> Result<Task> {
        self.store
            .get_all()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }
}
