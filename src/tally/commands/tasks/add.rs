use crate::allocator::next_task_id;
use crate::collection::Collection;
use crate::commands::{require_description, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;

pub fn run(tasks: &mut Collection<Task>, description: String) -> Result<CmdResult> {
    require_description(&description)?;

    let id = next_task_id(|candidate| tasks.ids().any(|id| id == candidate))?;
    let task = tasks.insert(Task::new(id, description))?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task added successfully (ID: {})",
        task.id
    )));
    Ok(result.with_affected_tasks(vec![task]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::TOKEN_BYTES;
    use crate::model::TaskStatus;

    #[test]
    fn new_task_starts_as_todo() {
        let mut tasks = Collection::new();
        let result = run(&mut tasks, "Buy groceries".into()).unwrap();

        let task = &result.affected_tasks[0];
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.description, "Buy groceries");
        assert_eq!(task.id.len(), TOKEN_BYTES * 2);
        assert_eq!(task.created_at, task.updated_at);
        assert!(tasks.contains(&task.id));
    }

    #[test]
    fn ids_are_unique_across_adds() {
        let mut tasks = Collection::new();
        for i in 0..50 {
            run(&mut tasks, format!("task {}", i)).unwrap();
        }
        assert_eq!(tasks.len(), 50);
    }

    #[test]
    fn blank_description_is_rejected() {
        let mut tasks = Collection::new();
        assert!(run(&mut tasks, "".into()).is_err());
        assert!(tasks.is_empty());
    }
}
