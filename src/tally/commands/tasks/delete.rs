use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::Task;

pub fn run(tasks: &mut Collection<Task>, id: &str) -> Result<CmdResult> {
    let removed = tasks
        .remove(&id.to_string())
        .ok_or_else(|| TallyError::TaskNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task deleted successfully (ID: {})",
        removed.id
    )));
    Ok(result.with_affected_tasks(vec![removed]))
}
