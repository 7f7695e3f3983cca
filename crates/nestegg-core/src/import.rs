//! Legacy-row migration
//!
//! The previous storage scheme kept every entry as a loosely-typed row with
//! the kind encoded in the name ("Expense:" prefix) plus an optional type
//! hint. This importer runs each row through the legacy classifier exactly
//! once and stores the resulting explicit kind; keyword inference never runs
//! again for migrated data.

use std::io::Read;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::classify::classify_legacy;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{EntryKind, Frequency, LoanKind, NewFinancialEntry};

/// A raw legacy row as exported by the old system
#[derive(Debug, Deserialize)]
struct LegacyRow {
    #[serde(alias = "rawName", alias = "raw_name", alias = "name")]
    raw_name: String,
    /// Kept as text so an unparseable value degrades to 0 instead of
    /// failing the whole file
    #[serde(default)]
    amount: String,
    #[serde(default)]
    frequency: Option<String>,
    #[serde(default, alias = "isPrimary", alias = "is_primary")]
    is_primary: Option<bool>,
    #[serde(default, alias = "typeHint", alias = "type_hint")]
    type_hint: Option<String>,
    #[serde(default, alias = "loanType", alias = "loan_type")]
    loan_type: Option<String>,
    #[serde(default)]
    principal: Option<f64>,
    #[serde(default, alias = "interestRate", alias = "interest_rate")]
    interest_rate: Option<f64>,
}

/// Counts from a legacy import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyImportStats {
    pub imported: usize,
    pub skipped: usize,
    pub income: usize,
    pub expenses: usize,
    pub investments: usize,
    pub loans: usize,
    /// Rows whose amount failed to parse and was stored as 0
    pub zero_amounts: usize,
}

/// Import legacy CSV rows for a user
///
/// Unreadable rows are logged and skipped; an unparseable amount keeps the
/// row but stores 0, matching how reads treat malformed amounts.
pub fn import_legacy_csv<R: Read>(
    db: &Database,
    user_id: &str,
    reader: R,
) -> Result<LegacyImportStats> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut stats = LegacyImportStats::default();

    for (line, record) in csv_reader.deserialize::<LegacyRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!(line = line + 2, error = %e, "Skipping unreadable legacy row");
                stats.skipped += 1;
                continue;
            }
        };

        let amount = if row.amount.trim().is_empty() {
            0.0
        } else {
            match row.amount.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => v,
                _ => {
                    warn!(
                        line = line + 2,
                        raw_name = %row.raw_name,
                        amount = %row.amount,
                        "Unparseable amount in legacy row, storing 0"
                    );
                    stats.zero_amounts += 1;
                    0.0
                }
            }
        };

        let classification = classify_legacy(&row.raw_name, row.type_hint.as_deref());

        // An explicit loan type from the old loan flow refines the variant
        let kind = match (classification.kind, row.loan_type.as_deref()) {
            (EntryKind::Loan(_), Some(loan_type)) => {
                let refined = loan_type.parse().unwrap_or(LoanKind::Other);
                EntryKind::Loan(refined)
            }
            (kind, _) => kind,
        };

        let frequency = row
            .frequency
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(Error::Import)?
            .unwrap_or(Frequency::Monthly);

        let new = NewFinancialEntry {
            name: classification.display_name,
            kind,
            amount,
            frequency,
            is_primary: row.is_primary.unwrap_or(false),
            principal: row.principal,
            interest_rate: row.interest_rate,
        };
        db.create_entry(user_id, &new)?;

        match kind {
            EntryKind::Income => stats.income += 1,
            EntryKind::Expense => stats.expenses += 1,
            EntryKind::Investment(_) => stats.investments += 1,
            EntryKind::Loan(_) => stats.loans += 1,
        }
        stats.imported += 1;
        debug!(raw_name = %row.raw_name, kind = %kind, "Imported legacy row");
    }

    Ok(stats)
}
