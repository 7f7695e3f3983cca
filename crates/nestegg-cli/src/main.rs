//! Nestegg CLI - Personal savings tracker
//!
//! Usage:
//!   nestegg init                  Initialize database
//!   nestegg add Salary 50000 --kind income
//!   nestegg dashboard             Show savings rate and top categories
//!   nestegg import --file old.csv Migrate legacy string-encoded entries
//!   nestegg serve --port 3000     Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let db_path = commands::resolve_db_path(cli.db.as_deref())?;

    match cli.command {
        Commands::Init => commands::cmd_init(&db_path),
        Commands::Add {
            name,
            amount,
            kind,
            detail,
            frequency,
            primary,
            principal,
            interest_rate,
        } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_add(
                &db,
                &cli.user,
                &name,
                amount,
                &kind,
                detail.as_deref(),
                &frequency,
                primary,
                principal,
                interest_rate,
            )
        }
        Commands::Entries { action } => {
            let db = commands::open_db(&db_path)?;
            match action {
                None | Some(EntriesAction::List) => commands::cmd_entries_list(&db, &cli.user),
                Some(EntriesAction::Update {
                    id,
                    name,
                    amount,
                    frequency,
                }) => commands::cmd_entries_update(
                    &db,
                    &cli.user,
                    id,
                    name.as_deref(),
                    amount,
                    frequency.as_deref(),
                ),
                Some(EntriesAction::Delete { id }) => {
                    commands::cmd_entries_delete(&db, &cli.user, id)
                }
            }
        }
        Commands::Dashboard {
            refresh_potential,
            limit,
        } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_dashboard(&db, &cli.user, refresh_potential, limit)
        }
        Commands::Import { file } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_import(&db, &cli.user, &file)
        }
        Commands::Export { output, format } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_export(&db, &cli.user, output.as_deref(), &format)
        }
        Commands::Serve { port, host } => commands::cmd_serve(&db_path, &host, port).await,
        Commands::Status => commands::cmd_status(&db_path, &cli.user),
        Commands::Reset { yes } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_reset(&db, yes)
        }
    }
}
