use clap::Parser;
use std::path::PathBuf;
use tally::api::{TaskApi, TASKS_CORRUPT_POLICY};
use tally::cli::init_logging;
use tally::cli::print::{print_messages, print_tasks};
use tally::config::TallyConfig;
use tally::error::Result;
use tally::model::TaskStatus;
use tally::store::fs::FileBackend;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TaskApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add { description } => handle_add(&mut ctx, description.join(" ")),
        Commands::Update { id, description } => {
            handle_update(&mut ctx, &id, description.join(" "))
        }
        Commands::Delete { id } => handle_delete(&mut ctx, &id),
        Commands::MarkInProgress { id } => handle_mark_in_progress(&mut ctx, &id),
        Commands::MarkDone { id } => handle_mark_done(&mut ctx, &id),
        Commands::List { status } => handle_list(&ctx, status),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = TallyConfig::load(&data_dir)?;
    let backend = FileBackend::new(config.tasks_path(&data_dir));
    tracing::debug!(path = %backend.path().display(), "opening task store");

    let api = TaskApi::open(backend, config.corrupt_policy(TASKS_CORRUPT_POLICY))?;
    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, description: String) -> Result<()> {
    let result = ctx.api.add_task(description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: &str, description: String) -> Result<()> {
    let result = ctx.api.update_task(id, description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_task(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark_in_progress(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.mark_in_progress(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark_done(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.mark_done(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, status: Option<TaskStatus>) -> Result<()> {
    let result = ctx.api.list_tasks(status)?;
    print_messages(&result.messages);
    print_tasks(&result.listed_tasks);
    Ok(())
}
