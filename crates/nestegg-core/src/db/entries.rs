//! Financial entry operations

use rusqlite::{params, OptionalExtension, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{EntryKind, EntryPatch, FinancialEntry, Frequency, NewFinancialEntry};

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<FinancialEntry> {
    let kind_col: String = row.get("kind")?;
    let detail_col: Option<String> = row.get("detail")?;
    let kind = EntryKind::from_columns(&kind_col, detail_col.as_deref()).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, e.into())
    })?;

    let frequency_col: String = row.get("frequency")?;
    let frequency: Frequency = frequency_col.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, e.into())
    })?;

    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;

    Ok(FinancialEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        kind,
        amount: row.get("amount")?,
        frequency,
        is_primary: row.get("is_primary")?,
        principal: row.get("principal")?,
        interest_rate: row.get("interest_rate")?,
        created_at: parse_datetime(&created_at),
        updated_at: parse_datetime(&updated_at),
    })
}

impl Database {
    /// List all entries for a user, oldest first
    pub fn list_entries(&self, user_id: &str) -> Result<Vec<FinancialEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, name, kind, detail, amount, frequency, is_primary,
                   principal, interest_rate, created_at, updated_at
            FROM entries
            WHERE user_id = ?
            ORDER BY id
            "#,
        )?;

        let entries = stmt
            .query_map(params![user_id], entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Fetch a single entry, scoped to the user
    pub fn get_entry(&self, user_id: &str, id: i64) -> Result<FinancialEntry> {
        let conn = self.conn()?;
        conn.query_row(
            r#"
            SELECT id, user_id, name, kind, detail, amount, frequency, is_primary,
                   principal, interest_rate, created_at, updated_at
            FROM entries
            WHERE user_id = ? AND id = ?
            "#,
            params![user_id, id],
            entry_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Entry {}", id)))
    }

    /// Create an entry; the kind is fixed from this point on
    pub fn create_entry(&self, user_id: &str, new: &NewFinancialEntry) -> Result<FinancialEntry> {
        if !new.amount.is_finite() || new.amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "Entry amount must be a non-negative number, got {}",
                new.amount
            )));
        }

        let name = if new.name.trim().is_empty() {
            crate::classify::FALLBACK_INCOME_NAME
        } else {
            new.name.trim()
        };

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO entries (user_id, name, kind, detail, amount, frequency, is_primary, principal, interest_rate)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                name,
                new.kind.kind_str(),
                new.kind.detail_str(),
                new.amount,
                new.frequency.as_str(),
                new.is_primary,
                new.principal,
                new.interest_rate,
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        self.get_entry(user_id, id)
    }

    /// Apply a partial update; absent fields are left unchanged
    pub fn update_entry(
        &self,
        user_id: &str,
        id: i64,
        patch: &EntryPatch,
    ) -> Result<FinancialEntry> {
        let existing = self.get_entry(user_id, id)?;

        if let Some(amount) = patch.amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::InvalidData(format!(
                    "Entry amount must be a non-negative number, got {}",
                    amount
                )));
            }
        }

        let name = patch
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&existing.name)
            .to_string();
        let kind = patch.kind.unwrap_or(existing.kind);
        let amount = patch.amount.unwrap_or(existing.amount);
        let frequency = patch.frequency.unwrap_or(existing.frequency);
        let is_primary = patch.is_primary.unwrap_or(existing.is_primary);
        let principal = patch.principal.or(existing.principal);
        let interest_rate = patch.interest_rate.or(existing.interest_rate);

        let conn = self.conn()?;
        conn.execute(
            r#"
            UPDATE entries
            SET name = ?, kind = ?, detail = ?, amount = ?, frequency = ?,
                is_primary = ?, principal = ?, interest_rate = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = ? AND id = ?
            "#,
            params![
                name,
                kind.kind_str(),
                kind.detail_str(),
                amount,
                frequency.as_str(),
                is_primary,
                principal,
                interest_rate,
                user_id,
                id,
            ],
        )?;
        drop(conn);

        self.get_entry(user_id, id)
    }

    /// Delete an entry, scoped to the user
    pub fn delete_entry(&self, user_id: &str, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute(
            "DELETE FROM entries WHERE user_id = ? AND id = ?",
            params![user_id, id],
        )?;
        if affected == 0 {
            return Err(Error::NotFound(format!("Entry {}", id)));
        }
        Ok(())
    }

    /// Count entries per kind for a user (for the status command)
    pub fn count_entries_by_kind(&self, user_id: &str) -> Result<Vec<(String, i64)>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT kind, COUNT(*) FROM entries WHERE user_id = ? GROUP BY kind ORDER BY kind",
        )?;
        let counts = stmt
            .query_map(params![user_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(counts)
    }
}
