use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally::commands::expenses::{parse_amount, parse_month};

#[derive(Parser, Debug)]
#[command(name = "expense-tracker", version)]
#[command(about = "Track expenses from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding expenses.json and tally.json (defaults to the current directory)
    #[arg(long, global = true, env = "TALLY_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,

        /// Amount spent
        #[arg(long, value_parser = parse_amount)]
        amount: f64,
    },

    /// Change the description or amount of an expense
    Update {
        /// ID of the expense to update
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        id: u32,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(long, value_parser = parse_amount)]
        amount: Option<f64>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show the total spent, optionally for one month
    Summary {
        /// Filter by month (format: YYYY-MM)
        #[arg(long, value_parser = parse_month)]
        month: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// ID of the expense to delete
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        id: u32,
    },

    /// Export expenses to a CSV file
    Export {
        /// Output CSV file (defaults to expenses.csv in the data directory)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}
