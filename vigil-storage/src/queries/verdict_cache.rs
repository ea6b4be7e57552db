//! verdict_cache queries: get by composite key, upsert, count.

use rusqlite::{params, Connection};
use vigil_core::errors::StorageError;

use crate::connection::pragmas::sqlite_err;

/// A cached verdict row.
#[derive(Debug, Clone)]
pub struct VerdictRow {
    pub path: String,
    pub content_hash: Vec<u8>,
    pub check_name: String,
    pub ruleset_version: u32,
    pub passed: bool,
    pub violations_json: String,
    pub output_excerpt: Option<String>,
    pub created_at: i64,
    pub ttl_secs: u64,
}

/// Get a cached verdict by its composite key.
pub fn get(
    conn: &Connection,
    path: &str,
    content_hash: &[u8],
    check_name: &str,
    ruleset_version: u32,
) -> Result<Option<VerdictRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT path, content_hash, check_name, ruleset_version,
                    passed, violations_json, output_excerpt, created_at, ttl_secs
             FROM verdict_cache
             WHERE path = ?1 AND content_hash = ?2
               AND check_name = ?3 AND ruleset_version = ?4",
        )
        .map_err(sqlite_err)?;

    let mut rows = stmt
        .query_map(
            params![path, content_hash, check_name, ruleset_version],
            |row| {
                Ok(VerdictRow {
                    path: row.get(0)?,
                    content_hash: row.get(1)?,
                    check_name: row.get(2)?,
                    ruleset_version: row.get(3)?,
                    passed: row.get::<_, i64>(4)? != 0,
                    violations_json: row.get(5)?,
                    output_excerpt: row.get(6)?,
                    created_at: row.get(7)?,
                    ttl_secs: row.get::<_, i64>(8)? as u64,
                })
            },
        )
        .map_err(sqlite_err)?;

    match rows.next() {
        Some(Ok(row)) => Ok(Some(row)),
        Some(Err(e)) => Err(sqlite_err(e)),
        None => Ok(None),
    }
}

/// Insert or supersede a verdict row.
pub fn upsert(conn: &Connection, row: &VerdictRow) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO verdict_cache
         (path, content_hash, check_name, ruleset_version,
          passed, violations_json, output_excerpt, created_at, ttl_secs)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            row.path,
            row.content_hash,
            row.check_name,
            row.ruleset_version,
            row.passed as i64,
            row.violations_json,
            row.output_excerpt,
            row.created_at,
            row.ttl_secs as i64,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Count entries in the verdict cache.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM verdict_cache", [], |row| row.get(0))
        .map_err(sqlite_err)
}

/// Timestamp of the oldest entry, if any.
pub fn oldest_created_at(conn: &Connection) -> Result<Option<i64>, StorageError> {
    conn.query_row("SELECT MIN(created_at) FROM verdict_cache", [], |row| {
        row.get(0)
    })
    .map_err(sqlite_err)
}
