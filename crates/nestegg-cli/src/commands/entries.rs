//! Entry management commands

use anyhow::{anyhow, Result};
use nestegg_core::db::Database;
use nestegg_core::models::{
    EntryCategory, EntryKind, EntryPatch, Frequency, InvestmentKind, LoanKind, NewFinancialEntry,
};

/// Build an EntryKind from the --kind and --detail flags
fn parse_kind(kind: &str, detail: Option<&str>) -> Result<EntryKind> {
    match kind.to_lowercase().as_str() {
        "income" => Ok(EntryKind::Income),
        "expense" => Ok(EntryKind::Expense),
        "investment" => {
            let inner: InvestmentKind = detail
                .map(str::parse)
                .transpose()
                .map_err(|e: String| anyhow!(e))?
                .unwrap_or_default();
            Ok(EntryKind::Investment(inner))
        }
        "loan" => {
            let inner: LoanKind = detail
                .map(str::parse)
                .transpose()
                .map_err(|e: String| anyhow!(e))?
                .unwrap_or_default();
            Ok(EntryKind::Loan(inner))
        }
        other => Err(anyhow!(
            "Unknown kind: {} (valid: income, expense, investment, loan)",
            other
        )),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    db: &Database,
    user_id: &str,
    name: &str,
    amount: f64,
    kind: &str,
    detail: Option<&str>,
    frequency: &str,
    primary: bool,
    principal: Option<f64>,
    interest_rate: Option<f64>,
) -> Result<()> {
    let kind = parse_kind(kind, detail)?;
    let frequency: Frequency = frequency.parse().map_err(|e: String| anyhow!(e))?;

    let entry = db.create_entry(
        user_id,
        &NewFinancialEntry {
            name: name.to_string(),
            kind,
            amount,
            frequency,
            is_primary: primary,
            principal,
            interest_rate,
        },
    )?;

    println!(
        "✅ Added {} entry #{}: {} ({:.2}/{})",
        entry.kind, entry.id, entry.name, entry.amount, entry.frequency
    );
    Ok(())
}

pub fn cmd_entries_list(db: &Database, user_id: &str) -> Result<()> {
    let entries = db.list_entries(user_id)?;

    if entries.is_empty() {
        println!("No entries found. Add one with:");
        println!("  nestegg add Salary 50000 --kind income");
        return Ok(());
    }

    println!();
    println!("📒 Entries");
    println!("   ──────────────────────────────────────────────────────────");

    for entry in entries {
        let primary = if entry.is_primary { " ★" } else { "" };
        println!(
            "   #{:<4} {:<24} {:>12.2}  {:<8} {}{}",
            entry.id,
            entry.name,
            entry.amount,
            entry.frequency.as_str(),
            entry.kind,
            primary
        );
        if entry.kind.category() == EntryCategory::Loan {
            if let (Some(principal), Some(rate)) = (entry.principal, entry.interest_rate) {
                // Simple monthly interest on the outstanding principal
                let monthly_interest = principal * rate / 100.0 / 12.0;
                println!(
                    "         principal {:.0}, {:.2}% p.a. (~{:.0}/mo interest)",
                    principal, rate, monthly_interest
                );
            }
        }
    }

    Ok(())
}

pub fn cmd_entries_update(
    db: &Database,
    user_id: &str,
    id: i64,
    name: Option<&str>,
    amount: Option<f64>,
    frequency: Option<&str>,
) -> Result<()> {
    let frequency = frequency
        .map(str::parse::<Frequency>)
        .transpose()
        .map_err(|e: String| anyhow!(e))?;

    let patch = EntryPatch {
        name: name.map(str::to_string),
        amount,
        frequency,
        ..Default::default()
    };
    let entry = db.update_entry(user_id, id, &patch)?;

    println!(
        "✅ Updated entry #{}: {} ({:.2}/{})",
        entry.id, entry.name, entry.amount, entry.frequency
    );
    Ok(())
}

pub fn cmd_entries_delete(db: &Database, user_id: &str, id: i64) -> Result<()> {
    db.delete_entry(user_id, id)?;
    println!("✅ Deleted entry #{}", id);
    Ok(())
}
