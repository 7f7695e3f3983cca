//! Entry export to CSV or JSON

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::Result;
use crate::models::FinancialEntry;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (valid: csv, json)", s)),
        }
    }
}

/// A flat entry row for export files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryExport {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub detail: Option<String>,
    pub amount: f64,
    pub frequency: String,
    pub is_primary: bool,
    pub principal: Option<f64>,
    pub interest_rate: Option<f64>,
    pub created_at: String,
}

impl From<&FinancialEntry> for EntryExport {
    fn from(entry: &FinancialEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            kind: entry.kind.kind_str().to_string(),
            detail: entry.kind.detail_str().map(str::to_string),
            amount: entry.amount,
            frequency: entry.frequency.as_str().to_string(),
            is_primary: entry.is_primary,
            principal: entry.principal,
            interest_rate: entry.interest_rate,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

/// Write all of a user's entries to `writer`; returns the row count
pub fn export_entries<W: Write>(
    db: &Database,
    user_id: &str,
    format: ExportFormat,
    writer: W,
) -> Result<usize> {
    let entries = db.list_entries(user_id)?;
    let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in &rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, &rows)?;
        }
    }

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Frequency, InvestmentKind, NewFinancialEntry};

    fn seeded_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.create_entry(
            "local",
            &NewFinancialEntry {
                name: "Salary".to_string(),
                kind: EntryKind::Income,
                amount: 50000.0,
                frequency: Frequency::Monthly,
                is_primary: true,
                principal: None,
                interest_rate: None,
            },
        )
        .unwrap();
        db.create_entry(
            "local",
            &NewFinancialEntry {
                name: "Gold SIP".to_string(),
                kind: EntryKind::Investment(InvestmentKind::Gold),
                amount: 5000.0,
                frequency: Frequency::Monthly,
                is_primary: false,
                principal: None,
                interest_rate: None,
            },
        )
        .unwrap();
        db
    }

    #[test]
    fn test_csv_export() {
        let db = seeded_db();
        let mut buffer = Vec::new();
        let count = export_entries(&db, "local", ExportFormat::Csv, &mut buffer).unwrap();

        assert_eq!(count, 2);
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("id,name,kind,detail,amount"));
        assert!(text.contains("Salary,income"));
        assert!(text.contains("Gold SIP,investment,gold"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let db = seeded_db();
        let mut buffer = Vec::new();
        let count = export_entries(&db, "local", ExportFormat::Json, &mut buffer).unwrap();

        assert_eq!(count, 2);
        let rows: Vec<EntryExport> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Salary");
        assert_eq!(rows[1].detail.as_deref(), Some("gold"));
    }

    #[test]
    fn test_export_empty_user() {
        let db = Database::in_memory().unwrap();
        let mut buffer = Vec::new();
        let count = export_entries(&db, "nobody", ExportFormat::Json, &mut buffer).unwrap();
        assert_eq!(count, 0);
    }
}
