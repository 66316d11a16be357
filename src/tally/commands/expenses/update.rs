use crate::collection::Collection;
use crate::commands::{require_description, CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::Expense;

use super::{find_mut, ExpenseUpdate};

pub fn run(
    expenses: &mut Collection<Expense>,
    id: u32,
    update: ExpenseUpdate,
) -> Result<CmdResult> {
    if update.is_empty() {
        return Err(TallyError::ValidationMissing("--description or --amount"));
    }
    if let Some(description) = &update.description {
        require_description(description)?;
    }

    let expense = find_mut(expenses, id)?;
    if let Some(description) = update.description {
        expense.description = description;
    }
    if let Some(amount) = update.amount {
        expense.amount = amount;
    }
    let expense = expense.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Expense updated successfully (ID: {})",
        id
    )));
    Ok(result.with_affected_expenses(vec![expense]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, expenses_with_ids};

    #[test]
    fn replaces_only_given_fields() {
        let mut expenses = expenses_with_ids(&[1, 2]);
        let update = ExpenseUpdate {
            description: None,
            amount: Some(42.0),
        };
        run(&mut expenses, 2, update).unwrap();

        let expense = expenses.get(&2).unwrap();
        assert_eq!(expense.amount, 42.0);
        assert_eq!(expense.description, "Expense 2");
        assert_eq!(expense.date, date("2024-01-01"));
    }

    #[test]
    fn missing_id_leaves_collection_untouched() {
        let mut expenses = expenses_with_ids(&[1, 2]);
        let before = expenses.clone();
        let update = ExpenseUpdate {
            description: Some("Changed".into()),
            amount: None,
        };

        let err = run(&mut expenses, 9, update).unwrap_err();
        assert!(matches!(err, TallyError::ExpenseNotFound(9)));
        assert_eq!(expenses, before);
    }

    #[test]
    fn requires_at_least_one_field() {
        let mut expenses = expenses_with_ids(&[1]);
        let err = run(&mut expenses, 1, ExpenseUpdate::default()).unwrap_err();
        assert!(matches!(err, TallyError::ValidationMissing(_)));
    }
}
