use crate::collection::Collection;
use crate::error::{Result, TallyError};
use crate::model::Expense;
use chrono::NaiveDate;

pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod summary;
pub mod update;

/// Fields an `update` may replace. The date is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none()
    }
}

/// Parses a non-negative, finite currency amount.
pub fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    let amount: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("'{}' is not a valid amount", s));
    }
    Ok(amount)
}

/// Accepts `YYYY-MM` and returns it unchanged.
pub fn parse_month(s: &str) -> std::result::Result<String, String> {
    let well_formed = s.len() == 7
        && s.as_bytes()[4] == b'-'
        && NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").is_ok();
    if well_formed {
        Ok(s.to_string())
    } else {
        Err(format!("'{}' is not a month in YYYY-MM form", s))
    }
}

pub(crate) fn find_mut(expenses: &mut Collection<Expense>, id: u32) -> Result<&mut Expense> {
    expenses
        .get_mut(&id)
        .ok_or(TallyError::ExpenseNotFound(id))
}
