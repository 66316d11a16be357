use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::Expense;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str = "id,description,amount,date";

pub fn run(expenses: &Collection<Expense>, path: &Path) -> Result<CmdResult> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(TallyError::Io)?;
        }
    }

    let file = File::create(path).map_err(TallyError::Io)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, expenses)?;
    writer.flush().map_err(TallyError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} expense(s) to {}",
        expenses.len(),
        path.display()
    )));
    Ok(result.with_export_path(path.to_path_buf()))
}

/// Header row plus one row per expense, rows separated by `\n`.
/// The description is always quoted; the other columns never need to be.
fn write_csv<W: Write>(mut writer: W, expenses: &Collection<Expense>) -> Result<()> {
    writer
        .write_all(CSV_HEADER.as_bytes())
        .map_err(TallyError::Io)?;
    for expense in expenses.iter() {
        write!(
            writer,
            "\n{},{},{},{}",
            expense.id,
            quote(&expense.description),
            expense.amount,
            expense.date.format("%Y-%m-%d")
        )
        .map_err(TallyError::Io)?;
    }
    Ok(())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::expense;
    use tempfile::TempDir;

    fn csv_of(expenses: &Collection<Expense>) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, expenses).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn doubles_embedded_quotes() {
        let expenses =
            Collection::from_records(vec![expense(1, r#"He said "hi""#, 10.0, "2024-01-10")])
                .unwrap();
        let csv = csv_of(&expenses);
        assert!(csv.contains(r#""He said ""hi""""#));
        assert_eq!(csv, "id,description,amount,date\n1,\"He said \"\"hi\"\"\",10,2024-01-10");
    }

    #[test]
    fn commas_stay_inside_the_quoted_field() {
        let expenses =
            Collection::from_records(vec![expense(2, "Milk, eggs", 4.5, "2024-03-02")]).unwrap();
        let csv = csv_of(&expenses);
        assert_eq!(csv.lines().nth(1), Some("2,\"Milk, eggs\",4.5,2024-03-02"));
    }

    #[test]
    fn empty_collection_exports_header_only() {
        assert_eq!(csv_of(&Collection::new()), CSV_HEADER);
    }

    #[test]
    fn run_writes_file_to_requested_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("report.csv");
        let expenses =
            Collection::from_records(vec![expense(1, "Lunch", 12.0, "2024-01-10")]).unwrap();

        let result = run(&expenses, &path).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(path.as_path()));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "id,description,amount,date\n1,\"Lunch\",12,2024-01-10");
    }
}
