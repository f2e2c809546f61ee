use super::{LoadReport, TaskStore};
use crate::error::{Result, TaskpadError};
use crate::model::Task;

/// In-memory store for tests. Holds the mirrored records directly, so tests
/// can assert exactly what would have been written to disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Task>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(records: Vec<Task>) -> Self {
        Self {
            records,
            fail_writes: false,
        }
    }

    /// A store whose writes always fail, for exercising the degraded path
    /// where the in-memory list and the mirror diverge.
    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail_writes: true,
        }
    }

    pub fn records(&self) -> &[Task] {
        &self.records
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(TaskpadError::Store("simulated write failure".to_string()));
        }
        Ok(())
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        Ok(LoadReport {
            tasks: self.records.clone(),
            skipped: Vec::new(),
        })
    }

    fn append_one(&mut self, task: &Task) -> Result<()> {
        self.check_writable()?;
        self.records.push(task.clone());
        Ok(())
    }

    fn replace_all(&mut self, tasks: &[Task]) -> Result<()> {
        self.check_writable()?;
        self.records = tasks.to_vec();
        Ok(())
    }
}
