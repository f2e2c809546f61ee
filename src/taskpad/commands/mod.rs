use crate::error::TaskpadError;
use crate::model::Task;

pub mod create;
pub mod delete;
pub mod find;
pub mod list;
pub mod mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A task paired with its current 1-based position, for display.
#[derive(Debug, Clone)]
pub struct ListedTask {
    pub position: usize,
    pub task: Task,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_tasks: Vec<ListedTask>,
    pub affected_tasks: Vec<Task>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<ListedTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }
}

/// A failed mirror write degrades to a warning; the in-memory list stays
/// authoritative for the rest of the session.
pub(crate) fn report_mirror_failure(result: &mut CmdResult, error: TaskpadError) {
    result.add_message(CmdMessage::warning(format!(
        "Could not update the task file ({error}). Changes are kept in memory for this session."
    )));
}

pub(crate) fn count_phrase(len: usize) -> String {
    if len == 1 {
        "1 task".to_string()
    } else {
        format!("{len} tasks")
    }
}
