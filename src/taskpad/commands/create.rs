use crate::commands::{count_phrase, report_mirror_failure, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::TaskStore;
use crate::tasks::TaskList;

/// Appends a newly built task and mirrors it to the store. Insertions only
/// ever append, so the mirror write is a single-record append too.
pub fn run<S: TaskStore>(tasks: &mut TaskList, store: &mut S, task: Task) -> Result<CmdResult> {
    tasks.append(task.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Got it. I've added this task:"));
    result.add_message(CmdMessage::info(format!("  {task}")));
    result.add_message(CmdMessage::info(format!(
        "Now you have {} in the list.",
        count_phrase(tasks.len())
    )));

    if let Err(e) = store.append_one(&task) {
        report_mirror_failure(&mut result, e);
    }
    result.affected_tasks.push(task);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_and_mirrors_the_new_task() {
        let mut tasks = TaskList::new();
        let mut store = InMemoryStore::new();

        let result = run(&mut tasks, &mut store, Task::todo("read book")).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get(1).unwrap().description, "read book");
        assert!(!tasks.get(1).unwrap().is_done());
        assert_eq!(store.records().len(), 1);
        assert_eq!(result.affected_tasks.len(), 1);
    }

    #[test]
    fn reports_the_new_count() {
        let mut tasks = TaskList::new();
        let mut store = InMemoryStore::new();
        run(&mut tasks, &mut store, Task::todo("a")).unwrap();
        let result = run(&mut tasks, &mut store, Task::todo("b")).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("2 tasks")));
    }

    #[test]
    fn keeps_the_task_in_memory_when_the_mirror_write_fails() {
        let mut tasks = TaskList::new();
        let mut store = InMemoryStore::failing();

        let result = run(&mut tasks, &mut store, Task::todo("read book")).unwrap();

        assert_eq!(tasks.len(), 1);
        assert!(store.records().is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }
}
