use super::{record, LoadReport, SkippedRecord, TaskStore};
use crate::error::{Result, TaskpadError};
use crate::model::Task;
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-backed task store: one encoded record per line.
///
/// Every call opens and closes its own handle; nothing is held across
/// calls. `replace_all` writes a sibling temp file and renames it over the
/// store, so a crash mid-write never leaves a half-written store behind.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TaskpadError::Io)?;
            }
        }
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport::default());
        }
        let content = fs::read_to_string(&self.path).map_err(TaskpadError::Io)?;

        let mut report = LoadReport::default();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match record::decode(line) {
                Ok(task) => report.tasks.push(task),
                Err(e) => report.skipped.push(SkippedRecord {
                    line: i + 1,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(report)
    }

    fn append_one(&mut self, task: &Task) -> Result<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(TaskpadError::Io)?;
        writeln!(file, "{}", record::encode(task)).map_err(TaskpadError::Io)?;
        Ok(())
    }

    fn replace_all(&mut self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent()?;
        let mut body = String::new();
        for task in tasks {
            body.push_str(&record::encode(task));
            body.push('\n');
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(TaskpadError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TaskpadError::Io)?;
        Ok(())
    }
}
