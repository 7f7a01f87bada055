use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// SiteLedger - construction project ledger
#[derive(Parser, Debug)]
#[command(name = "siteledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the ledger's collection documents
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage construction projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show a project's overview and financial summary
    Show {
        /// Project id
        id: String,
    },

    /// Record and list expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Record and list payments
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List projects, newest first
    List {
        /// Substring match on project or client name
        #[arg(long)]
        search: Option<String>,

        /// Filter by status: planning, in-progress, on-hold, completed
        #[arg(long)]
        status: Option<String>,
    },

    /// Create a project (missing fields are prompted for interactively)
    Add {
        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Edit a project; flags you omit keep their current value
    Edit {
        /// Project id
        id: String,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Delete a project and its expenses and payments
    Remove {
        /// Project id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProjectFields {
    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Client name
    #[arg(long)]
    pub client: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Expected end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Status: planning, in-progress, on-hold, completed
    #[arg(long)]
    pub status: Option<String>,

    /// Total budget
    #[arg(long)]
    pub budget: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExpenseAction {
    /// Record an expense against a project
    Add {
        /// Project id
        #[arg(long)]
        project: String,

        #[command(flatten)]
        fields: ExpenseFields,
    },

    /// List expenses
    List {
        /// Only this project's expenses
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ExpenseFields {
    /// Category: materials, labor, equipment, transport, other
    #[arg(long)]
    pub category: Option<String>,

    /// What the money was spent on
    #[arg(long)]
    pub description: Option<String>,

    /// Amount
    #[arg(long)]
    pub amount: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PaymentAction {
    /// Record a payment against a project
    Add {
        /// Project id
        #[arg(long)]
        project: String,

        #[command(flatten)]
        fields: PaymentFields,
    },

    /// List payments
    List {
        /// Only this project's payments
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct PaymentFields {
    /// Direction: received (from client) or given (to supplier/worker)
    #[arg(long, visible_alias = "type")]
    pub direction: Option<String>,

    /// Counterparty name
    #[arg(long)]
    pub to: Option<String>,

    /// Amount
    #[arg(long)]
    pub amount: Option<String>,

    /// What the payment was for
    #[arg(long)]
    pub description: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Status: pending or completed
    #[arg(long)]
    pub status: Option<String>,
}
