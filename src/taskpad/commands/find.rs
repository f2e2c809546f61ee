use crate::commands::{CmdMessage, CmdResult, ListedTask};
use crate::error::Result;
use crate::tasks::TaskList;

/// Case-insensitive substring match over descriptions. Results keep the
/// collection order and their original positions, so they can be fed
/// straight back to mark/unmark/delete.
pub fn run(tasks: &TaskList, keyword: &str) -> Result<CmdResult> {
    let needle = keyword.to_lowercase();
    let listed: Vec<ListedTask> = tasks
        .find_all(|task| task.description.to_lowercase().contains(&needle))
        .map(|(position, task)| ListedTask {
            position,
            task: task.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No tasks matching '{keyword}' found."
        )));
        return Ok(result);
    }
    result.add_message(CmdMessage::info("Here are the matching tasks in your list:"));
    Ok(result.with_listed_tasks(listed))
}
