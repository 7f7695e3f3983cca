//! Legacy import and entry export commands

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use nestegg_core::db::Database;
use nestegg_core::export::{export_entries, ExportFormat};
use nestegg_core::import::import_legacy_csv;

pub fn cmd_import(db: &Database, user_id: &str, file: &Path) -> Result<()> {
    println!("📥 Importing legacy entries from {}...", file.display());

    let reader =
        File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;
    let stats = import_legacy_csv(db, user_id, reader)?;

    println!("   Imported: {}", stats.imported);
    println!(
        "   income {} / expenses {} / investments {} / loans {}",
        stats.income, stats.expenses, stats.investments, stats.loans
    );
    if stats.zero_amounts > 0 {
        println!(
            "   ⚠️  {} row(s) had unparseable amounts and were stored as 0",
            stats.zero_amounts
        );
    }
    if stats.skipped > 0 {
        println!("   ⚠️  {} unreadable row(s) skipped", stats.skipped);
    }

    println!("✅ Import complete. See the result with: nestegg dashboard");
    Ok(())
}

pub fn cmd_export(
    db: &Database,
    user_id: &str,
    output: Option<&Path>,
    format: &str,
) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow!(e))?;

    let count = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let count = export_entries(db, user_id, format, file)?;
            println!("✅ Exported {} entries to {}", count, path.display());
            count
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let count = export_entries(db, user_id, format, &mut handle)?;
            handle.flush()?;
            count
        }
    };

    if count == 0 {
        eprintln!("(no entries to export)");
    }
    Ok(())
}
