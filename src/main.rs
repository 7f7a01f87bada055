//! SiteLedger CLI entry point.
//!
//! Usage: siteledger <COMMAND>
//!
//! Commands:
//!   project  Manage construction projects (list, add, edit, remove)
//!   show     Show a project's overview and financial summary
//!   expense  Record and list expenses
//!   payment  Record and list payments

mod cli;
mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use siteledger::config::{default_data_dir, Config};
use siteledger::infrastructure::storage::FileStorage;
use siteledger::store::Ledger;

use cli::{Cli, Commands, ExpenseAction, PaymentAction, ProjectAction};
use ui::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::load_or_default();
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .or_else(default_data_dir)
        .context("could not determine a data directory; pass --data-dir")?;

    let storage = FileStorage::open(&data_dir)?;
    let mut ledger = Ledger::new(storage);
    let ui = UiContext::new(cli.json, config.ui.color, config.currency.symbol.clone());

    match cli.command {
        Commands::Project { action } => match action {
            ProjectAction::List { search, status } => {
                commands::project::cmd_list(&mut ledger, search, status, &ui)
            }
            ProjectAction::Add { fields } => commands::project::cmd_add(&mut ledger, fields, &ui),
            ProjectAction::Edit { id, fields } => {
                commands::project::cmd_edit(&mut ledger, &id, fields, &ui)
            }
            ProjectAction::Remove { id, yes } => {
                commands::project::cmd_remove(&mut ledger, &id, yes, &ui)
            }
        },
        Commands::Show { id } => commands::show::cmd_show(&mut ledger, &id, &ui),
        Commands::Expense { action } => match action {
            ExpenseAction::Add { project, fields } => {
                commands::expense::cmd_add(&mut ledger, &project, fields, &ui)
            }
            ExpenseAction::List { project } => {
                commands::expense::cmd_list(&mut ledger, project, &ui)
            }
        },
        Commands::Payment { action } => match action {
            PaymentAction::Add { project, fields } => {
                commands::payment::cmd_add(&mut ledger, &project, fields, &ui)
            }
            PaymentAction::List { project } => {
                commands::payment::cmd_list(&mut ledger, project, &ui)
            }
        },
    }
}
