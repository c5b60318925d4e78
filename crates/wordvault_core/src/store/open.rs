//! Store bootstrap utilities.
//!
//! # Responsibility
//! - Open file or in-memory SQLite-backed key-value stores.
//! - Configure connection pragmas required by core behavior.
//! - Apply schema migrations before returning a usable store.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - Returned stores have a busy timeout configured for host-UI usage.

use super::kv::SqliteKeyValueStore;
use super::migrations::apply_migrations;
use super::StoreResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a key-value store backed by a SQLite file.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=file");
    finish_open(Connection::open(path), started_at, "file")
}

/// Opens an in-memory key-value store, mainly for tests.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store_in_memory() -> StoreResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=memory");
    finish_open(Connection::open_in_memory(), started_at, "memory")
}

fn finish_open(
    opened: Result<Connection, rusqlite::Error>,
    started_at: Instant,
    mode: &str,
) -> StoreResult<SqliteKeyValueStore> {
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error_code=store_open_failed error={err}",
                started_at.elapsed().as_millis(),
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteKeyValueStore::new(conn))
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error_code=store_bootstrap_failed error={err}",
                started_at.elapsed().as_millis(),
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
