use crate::collection::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub description: String,
    pub amount: f64,
    // Stamped at creation and never rewritten
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(id: u32, description: String, amount: f64, date: NaiveDate) -> Self {
        Self {
            id,
            description,
            amount,
            date,
        }
    }

    /// The `YYYY-MM` bucket this expense falls in.
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl Record for Expense {
    type Id = u32;
    const KEY: &'static str = "expenses";

    fn id(&self) -> &u32 {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "unknown status '{}' (expected todo, in-progress or done)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            description,
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Task {
    type Id = String;
    const KEY: &'static str = "tasks";

    fn id(&self) -> &String {
        &self.id
    }
}
