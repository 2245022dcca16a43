//! # habitkit-core
//!
//! Core library for habitkit - a single-user habit tracker.
//!
//! This library provides:
//! - Domain types for daily task records
//! - A storage collaborator trait with an in-memory implementation
//! - Task mutation flows, including the today-only completion rule
//! - A pure analytics engine: streaks, completion rates, consistency
//!   scores, and momentum trends
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way:
//! - **Records:** the injected [`TaskStore`] hands over the full task list
//! - **Engine:** [`analytics`] derives every metric from that snapshot plus
//!   an explicit "now" instant
//! - **Presentation:** consumes the derived bundle (out of scope here)
//!
//! Nothing derived is ever persisted or cached; each render recomputes from
//! the complete record set, so the store stays the sole source of truth.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use habitkit_core::{analytics, MemoryStore, NewTask, TaskManager};
//!
//! let mut manager = TaskManager::new(MemoryStore::new());
//! let now = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
//!
//! let task = manager.add(NewTask::new("Read", "2024-01-02")).unwrap();
//! manager.toggle(&task.id, now).unwrap();
//!
//! let stats = analytics::overview(&manager.all().unwrap(), now);
//! assert_eq!(stats.streak, 1);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, LockReason, Result};
pub use store::{MemoryStore, TaskStore};
pub use tasks::TaskManager;
pub use types::*;

// Public modules
pub mod analytics;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod store;
pub mod tasks;
pub mod types;
