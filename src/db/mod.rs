mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

use crate::models::{Amounts, CategoryKind, PeriodRecord};

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        info!(path = %path.display(), "opened period store");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Periods ───────────────────────────────────────────────

    /// All stored period keys, in the order they were first saved.
    pub(crate) fn fetch_all_periods(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM periods ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Create or wholesale replace the record stored under `key`.
    pub(crate) fn insert_period(
        &mut self,
        key: &str,
        incomes: &Amounts,
        expenses: &Amounts,
        comment: &str,
    ) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO periods (key, comment, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(key) DO UPDATE SET comment = ?2, updated_at = ?3",
            params![key, comment, now],
        )?;
        let period_id: i64 = tx.query_row(
            "SELECT id FROM periods WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )?;
        tx.execute(
            "DELETE FROM period_amounts WHERE period_id = ?1",
            params![period_id],
        )?;
        for (kind, amounts) in [
            (CategoryKind::Income, incomes),
            (CategoryKind::Expense, expenses),
        ] {
            for (position, (category, amount)) in amounts.iter().enumerate() {
                tx.execute(
                    "INSERT INTO period_amounts (period_id, kind, position, category, amount)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![period_id, kind.as_str(), position as i64, category, amount],
                )?;
            }
        }
        tx.commit()?;
        debug!(
            key,
            incomes = incomes.len(),
            expenses = expenses.len(),
            "upserted period"
        );
        Ok(())
    }

    pub(crate) fn get_period(&self, key: &str) -> Result<Option<PeriodRecord>> {
        let found: Option<(i64, String)> = self
            .conn
            .query_row(
                "SELECT id, comment FROM periods WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let Some((period_id, comment)) = found else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT kind, category, amount FROM period_amounts
             WHERE period_id = ?1
             ORDER BY position",
        )?;
        let rows = stmt.query_map(params![period_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
            ))
        })?;

        let mut incomes = Amounts::default();
        let mut expenses = Amounts::default();
        for row in rows {
            let (kind, category, amount) = row?;
            match CategoryKind::parse(&kind) {
                Some(CategoryKind::Income) => incomes.push(category, amount),
                Some(CategoryKind::Expense) => expenses.push(category, amount),
                None => anyhow::bail!("Unknown amount kind '{kind}' in period {key}"),
            }
        }

        Ok(Some(PeriodRecord {
            incomes,
            expenses,
            comment,
        }))
    }
}
