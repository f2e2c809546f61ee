//! # Session facade
//!
//! [`TaskpadApi`] is the single entry point for a session: it owns the
//! in-memory [`TaskList`] and the durable store, and runs one full
//! classify → validate → mutate → persist cycle per input line. It is
//! generic over [`TaskStore`], so the same facade runs against the file
//! store in production and the in-memory store in tests.
//!
//! The facade returns structured [`CmdResult`] values and never prints;
//! presentation belongs to the binary.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::parser::{self, Instruction};
use crate::store::TaskStore;
use crate::tasks::TaskList;

pub struct TaskpadApi<S: TaskStore> {
    tasks: TaskList,
    store: S,
}

impl<S: TaskStore> TaskpadApi<S> {
    /// Loads the durable store and builds the session around it.
    ///
    /// Startup is deliberately forgiving: a store that cannot be read at
    /// all degrades to an empty list, and corrupt records are skipped, both
    /// surfaced as warnings rather than failures. The returned messages are
    /// whatever the load had to say.
    pub fn start(store: S) -> (Self, Vec<CmdMessage>) {
        let mut messages = Vec::new();
        let tasks = match store.load() {
            Ok(report) => {
                for skipped in &report.skipped {
                    messages.push(CmdMessage::warning(format!(
                        "Skipped unreadable record on line {} of the task file: {}",
                        skipped.line, skipped.reason
                    )));
                }
                TaskList::from_tasks(report.tasks)
            }
            Err(e) => {
                messages.push(CmdMessage::warning(format!(
                    "Could not read the task file ({e}). Starting with an empty list."
                )));
                TaskList::new()
            }
        };
        (Self { tasks, store }, messages)
    }

    /// Runs one input line to completion. Validation failures surface as
    /// errors and leave the list and the mirror untouched; mutations are
    /// mirrored to the store before returning.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        match parser::parse(line, &self.tasks)? {
            Instruction::List => commands::list::run(&self.tasks),
            Instruction::Add(task) => commands::create::run(&mut self.tasks, &mut self.store, task),
            Instruction::Mark(position) => {
                commands::mark::mark(&mut self.tasks, &mut self.store, position)
            }
            Instruction::Unmark(position) => {
                commands::mark::unmark(&mut self.tasks, &mut self.store, position)
            }
            Instruction::Delete(position) => {
                commands::delete::run(&mut self.tasks, &mut self.store, position)
            }
            Instruction::Find(keyword) => commands::find::run(&self.tasks, &keyword),
            Instruction::Bye => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info("Bye. Hope to see you again soon!"));
                Ok(result)
            }
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskpadError;
    use crate::model::Task;
    use crate::store::memory::InMemoryStore;

    fn session() -> TaskpadApi<InMemoryStore> {
        TaskpadApi::start(InMemoryStore::new()).0
    }

    #[test]
    fn a_full_session_keeps_list_and_mirror_in_step() {
        let mut api = session();

        api.execute("todo read book").unwrap();
        api.execute("deadline return book /by 2024-06-01").unwrap();

        let listed = api.execute("list").unwrap();
        assert_eq!(listed.listed_tasks.len(), 2);
        assert!(listed.listed_tasks.iter().all(|lt| !lt.task.is_done()));

        api.execute("mark 1").unwrap();
        assert!(api.store().records()[0].is_done());
        assert_eq!(
            crate::store::record::encode(&api.store().records()[0]),
            "T | 1 | read book"
        );

        api.execute("delete 2").unwrap();
        assert_eq!(api.tasks().len(), 1);
        assert_eq!(api.store().records().len(), 1);
        let listed = api.execute("list").unwrap();
        assert_eq!(listed.listed_tasks[0].position, 1);
        assert_eq!(listed.listed_tasks[0].task.description, "read book");
    }

    #[test]
    fn startup_load_restores_a_previous_session() {
        let mut done = Task::deadline("submit report", "2024-05-01".parse().unwrap());
        done.mark_done();
        let store = InMemoryStore::with_tasks(vec![Task::todo("buy milk"), done]);

        let (api, warnings) = TaskpadApi::start(store);

        assert!(warnings.is_empty());
        assert_eq!(api.tasks().len(), 2);
        assert!(api.tasks().get(2).unwrap().is_done());
    }

    #[test]
    fn validation_failures_leave_everything_unchanged() {
        let mut api = session();
        api.execute("todo read book").unwrap();

        for line in ["mark 5", "delete 0", "deadline x", "unmark one"] {
            api.execute(line).unwrap_err();
        }

        assert_eq!(api.tasks().len(), 1);
        assert!(!api.tasks().get(1).unwrap().is_done());
        assert_eq!(api.store().records().len(), 1);
    }

    #[test]
    fn unknown_instructions_are_recoverable() {
        let mut api = session();
        let err = api.execute("frobnicate 3").unwrap_err();
        assert!(matches!(err, TaskpadError::UnknownInstruction(_)));

        api.execute("todo still works").unwrap();
        assert_eq!(api.tasks().len(), 1);
    }

    #[test]
    fn redundant_mark_is_reported_and_changes_nothing() {
        let mut api = session();
        api.execute("todo read book").unwrap();
        api.execute("mark 1").unwrap();

        let err = api.execute("mark 1").unwrap_err();
        assert!(matches!(err, TaskpadError::AlreadyDone(1)));
        assert!(api.tasks().get(1).unwrap().is_done());

        api.execute("unmark 1").unwrap();
        let err = api.execute("unmark 1").unwrap_err();
        assert!(matches!(err, TaskpadError::AlreadyUndone(1)));
    }

    #[test]
    fn find_reports_original_positions() {
        let mut api = session();
        api.execute("todo read book").unwrap();
        api.execute("todo buy milk").unwrap();
        api.execute("todo return book").unwrap();

        let result = api.execute("find book").unwrap();
        let positions: Vec<usize> = result.listed_tasks.iter().map(|lt| lt.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }
}
