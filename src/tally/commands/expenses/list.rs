use crate::collection::Collection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Expense;

pub fn run(expenses: &Collection<Expense>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_expenses(expenses.iter().cloned().collect()))
}
