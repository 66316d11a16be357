use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::Expense;

pub fn run(expenses: &mut Collection<Expense>, id: u32) -> Result<CmdResult> {
    let removed = expenses
        .remove(&id)
        .ok_or(TallyError::ExpenseNotFound(id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Expense deleted successfully (ID: {})",
        id
    )));
    Ok(result.with_affected_expenses(vec![removed]))
}
