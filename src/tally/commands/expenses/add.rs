use crate::allocator::next_expense_id;
use crate::collection::Collection;
use crate::commands::{require_description, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Expense;
use chrono::NaiveDate;

pub fn run(
    expenses: &mut Collection<Expense>,
    description: String,
    amount: f64,
    date: NaiveDate,
) -> Result<CmdResult> {
    require_description(&description)?;

    let id = next_expense_id(expenses.ids().copied());
    let expense = expenses
        .insert(Expense::new(id, description, amount, date))?
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Expense added successfully (ID: {})",
        id
    )));
    Ok(result.with_affected_expenses(vec![expense]))
}
