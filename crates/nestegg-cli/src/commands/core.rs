//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `resolve_db_path` / `open_db` - Shared database helpers
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database info and entry counts
//! - `cmd_reset` - Clear all user data

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nestegg_core::db::Database;

/// Database file name inside the platform data directory
const DB_FILE_NAME: &str = "nestegg.db";

/// Resolve the database path: explicit flag, or the platform data directory
pub fn resolve_db_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    let data_dir = dirs::data_dir()
        .context("Could not determine the platform data directory; pass --db")?
        .join("nestegg");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    Ok(data_dir.join(DB_FILE_NAME))
}

/// Open the database, creating it if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add your income: nestegg add Salary 50000 --kind income");
    println!("  2. Add your spending: nestegg add Food 10000");
    println!("  3. See your savings rate: nestegg dashboard");

    Ok(())
}

pub fn cmd_status(db_path: &Path, user_id: &str) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 Nestegg Status");
    println!("   ─────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
        println!();
        return Ok(());
    }

    let db = open_db(db_path)?;
    let counts = db.count_entries_by_kind(user_id)?;

    println!();
    if counts.is_empty() {
        println!("   No entries yet. Add one with: nestegg add Salary 50000 --kind income");
    } else {
        for (kind, count) in counts {
            println!("   {}: {}", kind, count);
        }
    }

    if let Some(record) = db.get_potential_savings(user_id)? {
        println!();
        println!(
            "   Potential savings rate: {:.1}% (v{}, rolled {})",
            record.percent,
            record.version,
            record.generated_at.format("%Y-%m-%d")
        );
    }

    println!();
    Ok(())
}

pub fn cmd_reset(db: &Database, yes: bool) -> Result<()> {
    if !yes {
        println!("This deletes ALL entries and stored projections.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    db.reset()?;
    println!("✅ Database reset complete");
    Ok(())
}
