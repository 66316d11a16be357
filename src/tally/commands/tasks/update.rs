use crate::collection::Collection;
use crate::commands::{require_description, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;

use super::find_mut;

pub fn run(tasks: &mut Collection<Task>, id: &str, description: String) -> Result<CmdResult> {
    require_description(&description)?;

    let task = find_mut(tasks, id)?;
    task.description = description;
    task.touch();
    let task = task.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task updated successfully (ID: {})",
        task.id
    )));
    Ok(result.with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::model::TaskStatus;
    use crate::test_utils::{task, tasks};
    use chrono::{Duration, Utc};

    #[test]
    fn replaces_description_and_refreshes_timestamp() {
        let mut stale = task("aa11bb22", "Old", TaskStatus::Todo);
        stale.updated_at = Utc::now() - Duration::hours(1);
        let created = stale.created_at;
        let mut tasks = tasks(vec![stale]);

        run(&mut tasks, "aa11bb22", "New".into()).unwrap();

        let updated = tasks.get(&"aa11bb22".to_string()).unwrap();
        assert_eq!(updated.description, "New");
        assert_eq!(updated.created_at, created);
        assert!(updated.updated_at > Utc::now() - Duration::minutes(1));
    }

    #[test]
    fn missing_id_is_not_found_and_changes_nothing() {
        let mut tasks = tasks(vec![task("aa11bb22", "Keep", TaskStatus::Todo)]);
        let before = tasks.clone();

        let err = run(&mut tasks, "ffffffff", "Nope".into()).unwrap_err();
        assert!(matches!(err, TallyError::TaskNotFound(id) if id == "ffffffff"));
        assert_eq!(tasks, before);
    }
}
