use crate::error::{Result, TaskpadError};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%d %H%M";

/// A due date, with or without a time of day.
///
/// Rendered in the same canonical form it is parsed from, so values
/// round-trip unchanged between the console and the task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FromStr for DueDate {
    type Err = TaskpadError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATETIME_FMT) {
            return Ok(DueDate::DateTime(dt));
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FMT) {
            return Ok(DueDate::Date(d));
        }
        Err(TaskpadError::UnparsableDate(s.to_string()))
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::Date(d) => write!(f, "{}", d.format(DATE_FMT)),
            DueDate::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FMT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: DueDate },
    Event { from: DueDate, to: DueDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: DueDate) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: DueDate, to: DueDate) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Single-letter marker identifying the variant (T, D or E).
    pub fn type_marker(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.type_marker(), done, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
