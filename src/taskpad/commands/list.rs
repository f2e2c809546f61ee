use crate::commands::{CmdMessage, CmdResult, ListedTask};
use crate::error::Result;
use crate::tasks::TaskList;

pub fn run(tasks: &TaskList) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if tasks.is_empty() {
        result.add_message(CmdMessage::info("No tasks in your list yet."));
        return Ok(result);
    }

    result.add_message(CmdMessage::info("Here are the tasks in your list:"));
    let listed = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| ListedTask {
            position: i + 1,
            task: task.clone(),
        })
        .collect();
    Ok(result.with_listed_tasks(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    #[test]
    fn lists_all_tasks_in_insertion_order() {
        let tasks = TaskList::from_tasks(vec![Task::todo("a"), Task::todo("b")]);
        let result = run(&tasks).unwrap();

        assert_eq!(result.listed_tasks.len(), 2);
        assert_eq!(result.listed_tasks[0].position, 1);
        assert_eq!(result.listed_tasks[0].task.description, "a");
        assert_eq!(result.listed_tasks[1].position, 2);
        assert_eq!(result.listed_tasks[1].task.description, "b");
    }

    #[test]
    fn empty_list_gets_a_message_and_no_rows() {
        let result = run(&TaskList::new()).unwrap();
        assert!(result.listed_tasks.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
