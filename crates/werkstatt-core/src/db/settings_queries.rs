//! Workspace settings queries.
//!
//! Settings are a simple key-value table. The workspace controller owns the
//! known keys and their interpretation; this layer stores opaque strings.

use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

impl super::Database {
    /// Reads a setting value, `None` when unset.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SETTING_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query setting")
    }

    /// Writes a setting value, replacing any previous one.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SETTING_SQL, params![key, value])
            .db_context("Failed to write setting")?;
        Ok(())
    }

    /// Removes all projects and settings. The schema stays in place.
    pub fn reset_workspace(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute("DELETE FROM features", [])
            .db_context("Failed to clear features")?;
        tx.execute("DELETE FROM phases", [])
            .db_context("Failed to clear phases")?;
        tx.execute("DELETE FROM projects", [])
            .db_context("Failed to clear projects")?;
        tx.execute("DELETE FROM settings", [])
            .db_context("Failed to clear settings")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
