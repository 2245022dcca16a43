//! In-memory task store.

use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::types::{NewTask, Task};
use chrono::Utc;
use uuid::Uuid;

/// A [`TaskStore`] backed by a plain vector.
///
/// Insertion order is preserved, matching what a key-value backend returns
/// for a full scan. This is the fixture every analytics test runs against.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskStore for MemoryStore {
    fn add(&mut self, draft: NewTask) -> Result<Task> {
        let task = draft.into_task(Uuid::new_v4().to_string(), Utc::now());
        tracing::debug!(id = %task.id, date = %task.date, title = %task.title, "Stored task");
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn update(&mut self, task: &Task) -> Result<Task> {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                Ok(task.clone())
            }
            None => Err(Error::TaskNotFound(task.id.clone())),
        }
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            tracing::debug!(id, "Delete matched no task");
        }
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn get_by_date(&self, date: &str) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.date == date)
            .cloned()
            .collect())
    }

    fn clear(&mut self) -> Result<()> {
        tracing::info!(count = self.tasks.len(), "Clearing all tasks");
        self.tasks.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = MemoryStore::new();
        let a = store.add(NewTask::new("Read", "2024-01-01")).unwrap();
        let b = store.add(NewTask::new("Read", "2024-01-02")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_replaces_record() {
        let mut store = MemoryStore::new();
        let mut task = store.add(NewTask::new("Read", "2024-01-01")).unwrap();
        task.completed = true;
        store.update(&task).unwrap();
        assert!(store.get_all().unwrap()[0].completed);
    }

    #[test]
    fn test_update_unknown_id_errors() {
        let mut store = MemoryStore::new();
        let stray = NewTask::new("Read", "2024-01-01").into_task("ghost".to_string(), Utc::now());
        assert!(matches!(
            store.update(&stray),
            Err(Error::TaskNotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut store = MemoryStore::new();
        store.add(NewTask::new("Read", "2024-01-01")).unwrap();
        store.delete("missing").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_by_date_uses_exact_match() {
        let mut store = MemoryStore::new();
        store.add(NewTask::new("Read", "2024-01-01")).unwrap();
        store.add(NewTask::new("Run", "2024-01-02")).unwrap();
        let day = store.get_by_date("2024-01-01").unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].title, "Read");
        assert!(store.get_by_date("2024-01").unwrap().is_empty());
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = MemoryStore::new();
        store.add(NewTask::new("Read", "2024-01-01")).unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
