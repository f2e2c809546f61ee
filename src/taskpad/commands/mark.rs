use crate::commands::{report_mirror_failure, CmdMessage, CmdResult};
use crate::error::{Result, TaskpadError};
use crate::store::TaskStore;
use crate::tasks::TaskList;

pub fn mark<S: TaskStore>(tasks: &mut TaskList, store: &mut S, position: usize) -> Result<CmdResult> {
    set_done(tasks, store, position, true)
}

pub fn unmark<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    position: usize,
) -> Result<CmdResult> {
    set_done(tasks, store, position, false)
}

fn set_done<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    position: usize,
    done: bool,
) -> Result<CmdResult> {
    let len = tasks.len();
    let task = tasks
        .get_mut(position)
        .ok_or(TaskpadError::IndexOutOfRange { position, len })?;
    if done {
        task.mark_done();
    } else {
        task.mark_undone();
    }
    let snapshot = task.clone();

    let mut result = CmdResult::default();
    let headline = if done {
        "Nice! I've marked this task as done:"
    } else {
        "OK, I've marked this task as not done yet:"
    };
    result.add_message(CmdMessage::success(headline));
    result.add_message(CmdMessage::info(format!("  {snapshot}")));

    // State changed in place, so the whole mirror is rewritten.
    if let Err(e) = store.replace_all(tasks.as_slice()) {
        report_mirror_failure(&mut result, e);
    }
    result.affected_tasks.push(snapshot);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Task;
    use crate::store::memory::InMemoryStore;

    fn two_tasks() -> TaskList {
        TaskList::from_tasks(vec![Task::todo("a"), Task::todo("b")])
    }

    #[test]
    fn mark_sets_done_and_rewrites_the_mirror() {
        let mut tasks = two_tasks();
        let mut store = InMemoryStore::new();

        mark(&mut tasks, &mut store, 1).unwrap();

        assert!(tasks.get(1).unwrap().is_done());
        assert!(!tasks.get(2).unwrap().is_done());
        assert!(store.records()[0].is_done());
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn unmark_round_trips_to_the_original_state() {
        let mut tasks = two_tasks();
        let mut store = InMemoryStore::new();

        mark(&mut tasks, &mut store, 2).unwrap();
        unmark(&mut tasks, &mut store, 2).unwrap();

        assert!(!tasks.get(2).unwrap().is_done());
        assert!(!store.records()[1].is_done());
    }

    #[test]
    fn mark_survives_a_failing_mirror_with_a_warning() {
        let mut tasks = two_tasks();
        let mut store = InMemoryStore::failing();

        let result = mark(&mut tasks, &mut store, 1).unwrap();

        assert!(tasks.get(1).unwrap().is_done());
        assert!(store.records().is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }
}
