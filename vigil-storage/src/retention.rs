//! Age-based retention for the verdict cache.
//!
//! Superseded rows (old content hashes, old rule-set versions) are never
//! deleted explicitly when their key stops resolving; this sweep is what
//! eventually reclaims them.

use rusqlite::{params, Connection};
use vigil_core::errors::StorageError;

use crate::connection::pragmas::sqlite_err;

/// Delete entries created before `now - older_than_secs`.
/// Returns the number of rows removed.
pub fn sweep(conn: &Connection, now: i64, older_than_secs: i64) -> Result<u64, StorageError> {
    let cutoff = now - older_than_secs;
    let deleted = conn
        .execute(
            "DELETE FROM verdict_cache WHERE created_at < ?1",
            params![cutoff],
        )
        .map_err(sqlite_err)?;
    Ok(deleted as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;
    use crate::queries::verdict_cache::{count, upsert, VerdictRow};

    fn row(path: &str, created_at: i64) -> VerdictRow {
        VerdictRow {
            path: path.to_string(),
            content_hash: vec![0u8; 8],
            check_name: "naming".to_string(),
            ruleset_version: 1,
            passed: true,
            violations_json: "[]".to_string(),
            output_excerpt: None,
            created_at,
            ttl_secs: 3600,
        }
    }

    #[test]
    fn sweep_removes_only_old_rows() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        upsert(&conn, &row("old.ts", 1_000)).unwrap();
        upsert(&conn, &row("new.ts", 9_000)).unwrap();

        let deleted = sweep(&conn, 10_000, 5_000).unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(count(&conn).unwrap(), 1);
    }
}
