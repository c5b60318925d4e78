//! Key-value contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose the minimal `get`/`set` surface the word list repo persists through.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - `set` fully replaces the value under a key; there are no partial writes.
//! - Implementations are the only code allowed to touch `kv_store` rows.

use crate::store::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};

/// String-keyed blob store collaborator.
///
/// The on-device storage API is modelled behind this seam so the word list
/// logic stays independent of the concrete backend; tests and production
/// both go through the SQLite implementation below.
pub trait KeyValueStore {
    /// Returns the blob stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed key-value store over the `kv_store` table.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps a bootstrapped connection.
    ///
    /// Callers should obtain the connection through [`crate::store::open_store`]
    /// so migrations have been applied.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
