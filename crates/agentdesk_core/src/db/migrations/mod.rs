//! Roster schema steps.
//!
//! # Invariants
//! - Step `i` in `SCHEMA_STEPS` brings the database to version `i + 1`.
//! - Steps are only ever appended; the version lives in `PRAGMA user_version`.
//! - All pending steps apply in one transaction or not at all.

use crate::repo::agent_repo::{RepoError, RepoResult};
use log::info;
use rusqlite::Connection;

const SCHEMA_STEPS: &[&str] = &[include_str!("0001_agents.sql")];

/// Schema version this binary writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Schema version recorded in the database file.
pub fn schema_version(conn: &Connection) -> RepoResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Brings the roster schema up to `latest_version()`.
///
/// Returns the number of steps applied (zero for an up-to-date database).
///
/// # Errors
/// - `SchemaTooNew` when the file was written by a newer binary.
/// - `Migration` naming the step whose SQL failed; nothing is applied then.
pub fn apply_migrations(conn: &mut Connection) -> RepoResult<u32> {
    let found = schema_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(RepoError::SchemaTooNew { found, supported });
    }
    if found == supported {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for (version, sql) in (1u32..).zip(SCHEMA_STEPS).skip(found as usize) {
        tx.execute_batch(sql)
            .map_err(|source| RepoError::Migration { version, source })?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        found, supported
    );
    Ok(supported - found)
}
