//! Error types for habitkit-core

use thiserror::Error;

/// Main error type for the habitkit-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Task not found in the store
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// Completion may only change while the task's date is the current day
    /// in the reference timezone
    #[error("completion locked for {date}: {reason}")]
    CompletionLocked {
        /// Date of the task whose completion was rejected
        date: String,
        /// Why the toggle was rejected
        reason: LockReason,
    },

    /// Storage backend error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Why a completion toggle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    /// The task is dated after today; it cannot be completed yet
    FutureDate,
    /// The task is dated before today; its history is frozen
    PastDate,
}

impl std::fmt::Display for LockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockReason::FutureDate => write!(f, "future tasks cannot be completed yet"),
            LockReason::PastDate => write!(f, "past days are frozen"),
        }
    }
}

/// Result type alias for habitkit-core
pub type Result<T> = std::result::Result<T, Error>;
