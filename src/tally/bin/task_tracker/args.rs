use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally::model::TaskStatus;

#[derive(Parser, Debug)]
#[command(name = "task-tracker", version)]
#[command(about = "Track tasks from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding tasks.json and tally.json (defaults to the current directory)
    #[arg(long, global = true, env = "TALLY_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "n")]
    Add {
        /// Description of the task (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Replace the description of a task
    #[command(alias = "e")]
    Update {
        /// ID of the task
        id: String,

        /// New description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// ID of the task
        id: String,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// ID of the task
        id: String,
    },

    /// Mark a task as done
    MarkDone {
        /// ID of the task
        id: String,
    },

    /// List tasks, optionally only those with one status
    #[command(alias = "ls")]
    List {
        /// todo, in-progress or done
        status: Option<TaskStatus>,
    },
}
