//! Task storage collaborator.
//!
//! The analytics engine never talks to storage directly: it is handed the
//! result of [`TaskStore::get_all`] as a plain slice. The trait exists so the
//! rest of the crate (and its tests) can run against an in-memory fixture
//! instead of a real persistence backend, which stays outside this crate.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::{NewTask, Task};

/// Storage operations for task records.
///
/// The store owns id assignment: [`add`](TaskStore::add) takes an unsaved
/// [`NewTask`] and returns the stored [`Task`] with its opaque id and
/// creation stamp filled in.
pub trait TaskStore {
    /// Persist a new record, assigning its id and `created_at`.
    fn add(&mut self, draft: NewTask) -> Result<Task>;

    /// Replace the stored record with the same id.
    ///
    /// Errors with [`Error::TaskNotFound`](crate::Error::TaskNotFound) when
    /// no record has that id.
    fn update(&mut self, task: &Task) -> Result<Task>;

    /// Remove a record by id. Removing an absent id is a no-op.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// All records, in insertion order.
    fn get_all(&self) -> Result<Vec<Task>>;

    /// Records whose `date` equals the given string exactly.
    fn get_by_date(&self, date: &str) -> Result<Vec<Task>>;

    /// Remove every record.
    fn clear(&mut self) -> Result<()>;
}
