use crate::collection::Collection;
use crate::commands::{CmdResult, Summary};
use crate::error::Result;
use crate::model::Expense;
use chrono::NaiveDate;

/// Sums `amount` over expenses whose `YYYY-MM` equals `month` (all when `None`).
pub fn total(expenses: &Collection<Expense>, month: Option<&str>) -> (usize, f64) {
    expenses
        .matching(move |e| month.is_none_or(|m| e.month() == m))
        .fold((0, 0.0), |(count, sum), e| (count + 1, sum + e.amount))
}

pub fn run(expenses: &Collection<Expense>, month: Option<String>) -> Result<CmdResult> {
    let (count, total) = total(expenses, month.as_deref());
    Ok(CmdResult::default().with_summary(Summary {
        month,
        count,
        total,
    }))
}

/// "January 2024" for "2024-01"; `None` if the month does not parse.
pub fn month_label(month: &str) -> Option<String> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%B %Y").to_string())
}
