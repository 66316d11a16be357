use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Task, TaskStatus};

use super::find_mut;

pub fn mark_in_progress(tasks: &mut Collection<Task>, id: &str) -> Result<CmdResult> {
    set_status(tasks, id, TaskStatus::InProgress)
}

pub fn mark_done(tasks: &mut Collection<Task>, id: &str) -> Result<CmdResult> {
    set_status(tasks, id, TaskStatus::Done)
}

pub fn set_status(tasks: &mut Collection<Task>, id: &str, status: TaskStatus) -> Result<CmdResult> {
    let task = find_mut(tasks, id)?;
    task.status = status;
    task.touch();
    let task = task.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} marked as {}",
        task.id, status
    )));
    Ok(result.with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::test_utils::{task, tasks};

    #[test]
    fn marks_progress_then_done() {
        let mut tasks = tasks(vec![task("0000aaaa", "Write", TaskStatus::Todo)]);
        let id = "0000aaaa".to_string();

        mark_in_progress(&mut tasks, &id).unwrap();
        assert_eq!(tasks.get(&id).unwrap().status, TaskStatus::InProgress);

        let result = mark_done(&mut tasks, &id).unwrap();
        assert_eq!(tasks.get(&id).unwrap().status, TaskStatus::Done);
        assert_eq!(result.messages[0].content, "Task 0000aaaa marked as done");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut tasks = tasks(vec![task("0000aaaa", "Write", TaskStatus::Todo)]);
        let err = mark_done(&mut tasks, "0000bbbb").unwrap_err();
        assert!(matches!(err, TallyError::TaskNotFound(_)));
        assert_eq!(
            tasks.get(&"0000aaaa".to_string()).unwrap().status,
            TaskStatus::Todo
        );
    }
}
