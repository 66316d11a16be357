use crate::collection::Collection;
use crate::model::{Expense, Task, TaskStatus};
use chrono::NaiveDate;

pub fn date(ymd: &str) -> NaiveDate {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d").expect("fixture dates are YYYY-MM-DD")
}

pub fn expense(id: u32, description: &str, amount: f64, ymd: &str) -> Expense {
    Expense::new(id, description.to_string(), amount, date(ymd))
}

/// Expenses with the given ids, $1 each, all dated 2024-01-01.
pub fn expenses_with_ids(ids: &[u32]) -> Collection<Expense> {
    let records = ids
        .iter()
        .map(|&id| expense(id, &format!("Expense {}", id), 1.0, "2024-01-01"))
        .collect();
    Collection::from_records(records).expect("fixture ids are unique")
}

pub fn task(id: &str, description: &str, status: TaskStatus) -> Task {
    let mut task = Task::new(id.to_string(), description.to_string());
    task.status = status;
    task
}

pub fn tasks(records: Vec<Task>) -> Collection<Task> {
    Collection::from_records(records).expect("fixture ids are unique")
}
