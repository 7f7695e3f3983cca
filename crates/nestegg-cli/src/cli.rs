//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nestegg - Track income and spending, see your savings rate
#[derive(Parser)]
#[command(name = "nestegg")]
#[command(about = "Personal savings tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// User the command acts for
    #[arg(long, default_value = "local", global = true)]
    pub user: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Add a financial entry
    Add {
        /// Entry name (e.g. "Salary", "Food", "Gold SIP")
        name: String,

        /// Monthly amount
        amount: f64,

        /// Entry kind: income, expense, investment, loan
        #[arg(short, long, default_value = "expense")]
        kind: String,

        /// Variant detail for investments (gold, sip, stocks, ...) and
        /// loans (home, vehicle, personal, education)
        #[arg(short, long)]
        detail: Option<String>,

        /// Frequency: monthly or annual
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Mark as the primary entry of its kind
        #[arg(long)]
        primary: bool,

        /// Outstanding principal (loans only)
        #[arg(long)]
        principal: Option<f64>,

        /// Annual interest rate in percent (loans only)
        #[arg(long)]
        interest_rate: Option<f64>,
    },

    /// Manage entries (list, update, delete)
    Entries {
        #[command(subcommand)]
        action: Option<EntriesAction>,
    },

    /// Show the dashboard: monthly totals, savings rate, top categories
    Dashboard {
        /// Re-roll the stored potential-savings rate before showing
        #[arg(long)]
        refresh_potential: bool,

        /// Number of breakdown categories to show
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },

    /// Import legacy string-encoded entries from CSV
    Import {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Export entries to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show database status (path, size, entry counts)
    Status,

    /// Delete all entries and stored projections
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum EntriesAction {
    /// List entries
    List,

    /// Update an entry
    Update {
        /// Entry ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New amount
        #[arg(long)]
        amount: Option<f64>,

        /// New frequency: monthly or annual
        #[arg(long)]
        frequency: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,
    },
}
