mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::warn;

use crate::error::PersistenceError;
use crate::models::{BudgetTable, Expense};

pub(crate) const EXPENSES_KEY: &str = "expenses";
pub(crate) const BUDGETS_KEY: &str = "budgets";

/// String-keyed, string-valued storage, shaped like a browser's local storage.
pub(crate) trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

pub(crate) struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
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
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// Map-backed store with nothing on disk.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryKeyValueStore {
    items: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── Snapshots ─────────────────────────────────────────────────

/// Read the ledger and budget table. Each value falls back to its default on
/// its own when it is absent, unreadable, or fails to parse.
pub(crate) fn load(kv: &dyn KeyValueStore) -> (Vec<Expense>, BudgetTable) {
    let mut expenses: Vec<Expense> = read_json(kv, EXPENSES_KEY).unwrap_or_default();
    let before = expenses.len();
    expenses.retain(Expense::has_valid_amount);
    if expenses.len() != before {
        warn!(
            dropped = before - expenses.len(),
            "dropped stored expenses with out-of-range amounts"
        );
    }

    let budgets = read_json::<BudgetTable>(kv, BUDGETS_KEY)
        .map(BudgetTable::sanitized)
        .unwrap_or_default();

    (expenses, budgets)
}

/// Write both values. The expenses array keeps ledger order.
pub(crate) fn save(
    kv: &mut dyn KeyValueStore,
    expenses: &[Expense],
    budgets: &BudgetTable,
) -> Result<(), PersistenceError> {
    let expenses_json = serde_json::to_string(expenses)?;
    let budgets_json = serde_json::to_string(budgets)?;
    kv.set_item(EXPENSES_KEY, &expenses_json)?;
    kv.set_item(BUDGETS_KEY, &budgets_json)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Option<T> {
    match kv.get_item(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value failed to parse, using default");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, using default");
            None
        }
    }
}
