use crate::collection::Collection;
use crate::error::{Result, TallyError};
use crate::model::Task;

pub mod add;
pub mod delete;
pub mod list;
pub mod status;
pub mod update;

pub(crate) fn find_mut<'a>(tasks: &'a mut Collection<Task>, id: &str) -> Result<&'a mut Task> {
    tasks
        .get_mut(&id.to_string())
        .ok_or_else(|| TallyError::TaskNotFound(id.to_string()))
}
