use crate::collection::Collection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Task, TaskStatus};

pub fn run(tasks: &Collection<Task>, status: Option<TaskStatus>) -> Result<CmdResult> {
    let listed = tasks
        .matching(move |t| status.is_none_or(|s| t.status == s))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_tasks(listed))
}
