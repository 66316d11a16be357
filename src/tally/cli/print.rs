use crate::commands::{CmdMessage, MessageLevel, Summary};
use crate::commands::expenses::summary::month_label;
use crate::model::{Expense, Task};
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DESCRIPTION_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 11;
const TIME_WIDTH: usize = 14;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub fn print_expenses(expenses: &[Expense]) {
    print!("{}", render_expenses(expenses));
}

pub fn print_summary(summary: &Summary) {
    println!("{}", render_summary(summary));
}

pub fn print_tasks(tasks: &[Task]) {
    print!("{}", render_tasks(tasks, Utc::now()));
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn render_expenses(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let id_width = expenses
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = format!(
        "{:<id_w$}  {:<10}  {}  {:>10}\n",
        "ID",
        "Date",
        pad_to_width("Description", DESCRIPTION_WIDTH),
        "Amount",
        id_w = id_width
    );
    for expense in expenses {
        let description = truncate_to_width(&expense.description, DESCRIPTION_WIDTH);
        out.push_str(&format!(
            "{:<id_w$}  {}  {}  {:>10}\n",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            pad_to_width(&description, DESCRIPTION_WIDTH),
            format_amount(expense.amount),
            id_w = id_width
        ));
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    let scope = summary
        .month
        .as_deref()
        .map(|m| {
            let label = month_label(m).unwrap_or_else(|| m.to_string());
            format!(" for {}", label)
        })
        .unwrap_or_default();
    format!("Total expenses{}: {}", scope, format_amount(summary.total))
}

pub fn render_tasks(tasks: &[Task], now: DateTime<Utc>) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut out = String::new();
    for task in tasks {
        let description = truncate_to_width(&task.description, DESCRIPTION_WIDTH);
        out.push_str(&format!(
            "{}  {:<status_w$}  {}  {:>time_w$}\n",
            task.id,
            task.status.as_str(),
            pad_to_width(&description, DESCRIPTION_WIDTH),
            format_time_ago(task.updated_at, now),
            status_w = STATUS_WIDTH,
            time_w = TIME_WIDTH
        ));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
