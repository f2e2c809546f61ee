//! # Storage Layer
//!
//! The durable mirror of the in-memory task list. The [`TaskStore`] trait
//! abstracts the backend:
//!
//! - [`fs::FileStore`]: production storage, one encoded record per line in a
//!   plain-text file (see [`record`] for the format).
//! - [`memory::InMemoryStore`]: in-memory mirror for tests — no filesystem,
//!   fast, isolated.
//!
//! The store is written after every mutating instruction and read exactly
//! once, at startup. Pure insertions go through [`TaskStore::append_one`] so
//! adding a task never rewrites the whole file; anything that alters or
//! removes existing records goes through [`TaskStore::replace_all`].
//!
//! A write failure is reported to the caller but must not tear the session
//! down: the in-memory list stays authoritative and the mirror catches up on
//! the next successful write.

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;
pub mod record;

/// A record that could not be decoded during [`TaskStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: String,
}

/// Outcome of a startup load: the tasks that decoded cleanly, plus any
/// lines that were skipped as corrupt.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedRecord>,
}

/// Abstract interface for the durable task mirror.
pub trait TaskStore {
    /// Read the whole store in record order. A store that does not exist
    /// yet is an empty report, not an error; corrupt records are skipped
    /// and reported, never fatal.
    fn load(&self) -> Result<LoadReport>;

    /// Append a single newly created task to the store.
    fn append_one(&mut self, task: &Task) -> Result<()>;

    /// Replace the whole store with the given tasks, in order.
    fn replace_all(&mut self, tasks: &[Task]) -> Result<()>;
}
