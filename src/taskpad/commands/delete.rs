use crate::commands::{count_phrase, report_mirror_failure, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TaskStore;
use crate::tasks::TaskList;

pub fn run<S: TaskStore>(tasks: &mut TaskList, store: &mut S, position: usize) -> Result<CmdResult> {
    let removed = tasks.remove_at(position)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Noted. I've removed this task:"));
    result.add_message(CmdMessage::info(format!("  {removed}")));
    result.add_message(CmdMessage::info(format!(
        "Now you have {} in the list.",
        count_phrase(tasks.len())
    )));

    if let Err(e) = store.replace_all(tasks.as_slice()) {
        report_mirror_failure(&mut result, e);
    }
    result.affected_tasks.push(removed);
    Ok(result)
}
