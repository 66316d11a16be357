use clap::Parser;
use std::path::PathBuf;
use tally::api::{ExpenseApi, ExpenseUpdate, EXPENSES_CORRUPT_POLICY};
use tally::cli::init_logging;
use tally::cli::print::{print_expenses, print_messages, print_summary};
use tally::config::TallyConfig;
use tally::error::Result;
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
    api: ExpenseApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            description,
            amount,
        } => handle_add(&mut ctx, description, amount),
        Commands::Update {
            id,
            description,
            amount,
        } => handle_update(&mut ctx, id, ExpenseUpdate { description, amount }),
        Commands::List => handle_list(&ctx),
        Commands::Summary { month } => handle_summary(&ctx, month),
        Commands::Delete { id } => handle_delete(&mut ctx, id),
        Commands::Export { file } => handle_export(&ctx, file),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = TallyConfig::load(&data_dir)?;
    let backend = FileBackend::new(config.expenses_path(&data_dir));
    tracing::debug!(path = %backend.path().display(), "opening expense store");

    let api = ExpenseApi::open(backend, config.corrupt_policy(EXPENSES_CORRUPT_POLICY))?
        .with_export_path(config.export_path(&data_dir));

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, description: String, amount: f64) -> Result<()> {
    let result = ctx.api.add_expense(description, amount)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u32, update: ExpenseUpdate) -> Result<()> {
    let result = ctx.api.update_expense(id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_expenses()?;
    print_messages(&result.messages);
    print_expenses(&result.listed_expenses);
    Ok(())
}

fn handle_summary(ctx: &AppContext, month: Option<String>) -> Result<()> {
    let result = ctx.api.summary(month)?;
    print_messages(&result.messages);
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.delete_expense(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(file)?;
    print_messages(&result.messages);
    Ok(())
}
