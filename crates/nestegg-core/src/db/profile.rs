//! Persisted per-user potential-savings record
//!
//! The record is written once on the first complete dashboard build and then
//! returned unchanged by every read. Concurrent first builds race benignly:
//! the REPLACE makes the last writer win, which is acceptable for a value
//! contended only within a single user's sessions.

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::PotentialSavings;

impl Database {
    /// Read the stored potential-savings record, if one exists
    pub fn get_potential_savings(&self, user_id: &str) -> Result<Option<PotentialSavings>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT percent, version, generated_at FROM potential_savings WHERE user_id = ?",
                params![user_id],
                |row| {
                    let generated_at: String = row.get(2)?;
                    Ok(PotentialSavings {
                        percent: row.get(0)?,
                        version: row.get(1)?,
                        generated_at: parse_datetime(&generated_at),
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Store the potential-savings rate for a user (last write wins)
    pub fn set_potential_savings(
        &self,
        user_id: &str,
        percent: f64,
        version: i64,
    ) -> Result<PotentialSavings> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO potential_savings (user_id, percent, version, generated_at)
            VALUES (?, ?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(user_id) DO UPDATE SET
                percent = excluded.percent,
                version = excluded.version,
                generated_at = CURRENT_TIMESTAMP
            "#,
            params![user_id, percent, version],
        )?;
        drop(conn);

        self.get_potential_savings(user_id)?
            .ok_or_else(|| crate::error::Error::NotFound(format!("Potential savings for {}", user_id)))
    }

    /// Remove the stored record so the next dashboard build re-rolls
    pub fn clear_potential_savings(&self, user_id: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM potential_savings WHERE user_id = ?",
            params![user_id],
        )?;
        Ok(())
    }
}
